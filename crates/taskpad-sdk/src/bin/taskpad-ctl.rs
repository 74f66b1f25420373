// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Taskpad Control CLI
//!
//! CLI tool for interacting with taskpad-server.
//!
//! Usage:
//!   taskpad-ctl <command> [options]
//!
//! Commands:
//!   health                        Check server health
//!   stats                         Show aggregate counts
//!   list [--completed true|false] List todos
//!   show <id>                     Show one todo
//!   add --title <text> [--description <text>]
//!   done <id> / undone <id>       Flip the completion flag
//!   edit <id> [--title <text>] [--description <text>]
//!   rm <id>                       Delete a todo (and its notes)
//!   notes <todo_id>               List a todo's notes
//!   note-add <todo_id> --content <text>
//!   note-edit <todo_id> <note_id> --content <text>
//!   note-rm <todo_id> <note_id>   Delete a note

use std::process::ExitCode;

use taskpad_sdk::{CreateNote, CreateTodo, SdkConfig, TaskpadClient, UpdateNote, UpdateTodo};

fn print_usage() {
    eprintln!(
        r#"Usage: taskpad-ctl <command> [options]

Interact with taskpad-server.

COMMANDS:
    health                          Check server health
    stats                           Show aggregate counts
    list                            List todos (newest first)
    show <id>                       Show one todo
    add                             Create a todo
    done <id>                       Mark a todo completed
    undone <id>                     Mark a todo pending
    edit <id>                       Update title/description
    rm <id>                         Delete a todo and its notes
    notes <todo_id>                 List a todo's notes (oldest first)
    note-add <todo_id>              Add a note to a todo
    note-edit <todo_id> <note_id>   Replace a note's content
    note-rm <todo_id> <note_id>     Delete a note

LIST OPTIONS:
    --completed <true|false>        Filter by completion flag

ADD/EDIT OPTIONS:
    --title <text>                  Todo title (required for add)
    --description <text>            Todo description

NOTE OPTIONS:
    --content <text>                Note text (required)

ENVIRONMENT:
    TASKPAD_SERVER_URL              Server base URL (default: http://127.0.0.1:8080)
    TASKPAD_API_PREFIX              API mount prefix (default: /api)

EXAMPLES:
    # Create a todo and annotate it
    taskpad-ctl add --title "Learn X" --description "start with the guide"
    taskpad-ctl note-add 1 --content "chapter 3 is the useful one"

    # Finish it
    taskpad-ctl done 1

    # What is left?
    taskpad-ctl list --completed false
"#
    );
}

#[derive(Debug)]
enum Command {
    Health,
    Stats,
    List {
        completed: Option<bool>,
    },
    Show {
        id: i64,
    },
    Add {
        title: String,
        description: Option<String>,
    },
    Done {
        id: i64,
        completed: bool,
    },
    Edit {
        id: i64,
        title: Option<String>,
        description: Option<String>,
    },
    Rm {
        id: i64,
    },
    Notes {
        todo_id: i64,
    },
    NoteAdd {
        todo_id: i64,
        content: String,
    },
    NoteEdit {
        todo_id: i64,
        note_id: i64,
        content: String,
    },
    NoteRm {
        todo_id: i64,
        note_id: i64,
    },
}

fn parse_id(args: &[String], index: usize, what: &str) -> Result<i64, String> {
    args.get(index)
        .ok_or(format!("{what} required"))?
        .parse()
        .map_err(|_| format!("Invalid {what}"))
}

fn parse_args() -> Result<Command, String> {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from_vec(&args)
}

fn parse_args_from_vec(args: &[String]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            std::process::exit(0);
        }
        "health" => Ok(Command::Health),
        "stats" => Ok(Command::Stats),
        "list" => {
            let mut completed: Option<bool> = None;

            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--completed" => {
                        i += 1;
                        completed = Some(
                            args.get(i)
                                .ok_or("--completed requires true or false")?
                                .parse()
                                .map_err(|_| "--completed requires true or false")?,
                        );
                    }
                    arg => return Err(format!("Unknown argument: {}", arg)),
                }
                i += 1;
            }

            Ok(Command::List { completed })
        }
        "show" => Ok(Command::Show {
            id: parse_id(args, 2, "todo id")?,
        }),
        "add" => {
            let mut title: Option<String> = None;
            let mut description: Option<String> = None;

            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--title" => {
                        i += 1;
                        title = Some(args.get(i).ok_or("--title requires a value")?.clone());
                    }
                    "--description" => {
                        i += 1;
                        description =
                            Some(args.get(i).ok_or("--description requires a value")?.clone());
                    }
                    arg => return Err(format!("Unknown argument: {}", arg)),
                }
                i += 1;
            }

            Ok(Command::Add {
                title: title.ok_or("--title is required")?,
                description,
            })
        }
        "done" => Ok(Command::Done {
            id: parse_id(args, 2, "todo id")?,
            completed: true,
        }),
        "undone" => Ok(Command::Done {
            id: parse_id(args, 2, "todo id")?,
            completed: false,
        }),
        "edit" => {
            let id = parse_id(args, 2, "todo id")?;
            let mut title: Option<String> = None;
            let mut description: Option<String> = None;

            let mut i = 3;
            while i < args.len() {
                match args[i].as_str() {
                    "--title" => {
                        i += 1;
                        title = Some(args.get(i).ok_or("--title requires a value")?.clone());
                    }
                    "--description" => {
                        i += 1;
                        description =
                            Some(args.get(i).ok_or("--description requires a value")?.clone());
                    }
                    arg => return Err(format!("Unknown argument: {}", arg)),
                }
                i += 1;
            }

            if title.is_none() && description.is_none() {
                return Err("edit requires --title or --description".to_string());
            }

            Ok(Command::Edit {
                id,
                title,
                description,
            })
        }
        "rm" => Ok(Command::Rm {
            id: parse_id(args, 2, "todo id")?,
        }),
        "notes" => Ok(Command::Notes {
            todo_id: parse_id(args, 2, "todo id")?,
        }),
        "note-add" => {
            let todo_id = parse_id(args, 2, "todo id")?;
            let content = parse_flag_value(args, 3, "--content")?;
            Ok(Command::NoteAdd { todo_id, content })
        }
        "note-edit" => {
            let todo_id = parse_id(args, 2, "todo id")?;
            let note_id = parse_id(args, 3, "note id")?;
            let content = parse_flag_value(args, 4, "--content")?;
            Ok(Command::NoteEdit {
                todo_id,
                note_id,
                content,
            })
        }
        "note-rm" => Ok(Command::NoteRm {
            todo_id: parse_id(args, 2, "todo id")?,
            note_id: parse_id(args, 3, "note id")?,
        }),
        cmd => Err(format!("Unknown command: {}", cmd)),
    }
}

/// Parse a single `<flag> <value>` pair starting at `index`.
fn parse_flag_value(args: &[String], index: usize, flag: &str) -> Result<String, String> {
    match args.get(index).map(String::as_str) {
        Some(arg) if arg == flag => args
            .get(index + 1)
            .cloned()
            .ok_or(format!("{flag} requires a value")),
        Some(arg) => Err(format!("Unknown argument: {}", arg)),
        None => Err(format!("{flag} is required")),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = match parse_args() {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let client = match TaskpadClient::new(SdkConfig::from_env()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match execute_command(&client, cmd).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|e| e.to_string())?
    );
    Ok(())
}

async fn execute_command(client: &TaskpadClient, cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Health => {
            let health = client.health().await.map_err(|e| e.to_string())?;
            print_json(&health)?;
        }

        Command::Stats => {
            let stats = client.stats().await.map_err(|e| e.to_string())?;
            print_json(&stats)?;
        }

        Command::List { completed } => {
            let todos = client.list_todos(completed).await.map_err(|e| e.to_string())?;
            print_json(&todos)?;
        }

        Command::Show { id } => {
            let todo = client.get_todo(id).await.map_err(|e| e.to_string())?;
            print_json(&todo)?;
        }

        Command::Add { title, description } => {
            let todo = client
                .create_todo(&CreateTodo { title, description })
                .await
                .map_err(|e| e.to_string())?;
            print_json(&todo)?;
        }

        Command::Done { id, completed } => {
            let todo = client
                .update_todo(id, &UpdateTodo::completed(completed))
                .await
                .map_err(|e| e.to_string())?;
            print_json(&todo)?;
        }

        Command::Edit {
            id,
            title,
            description,
        } => {
            let patch = UpdateTodo {
                title,
                description,
                completed: None,
            };
            let todo = client
                .update_todo(id, &patch)
                .await
                .map_err(|e| e.to_string())?;
            print_json(&todo)?;
        }

        Command::Rm { id } => {
            client.delete_todo(id).await.map_err(|e| e.to_string())?;
            println!("deleted todo {}", id);
        }

        Command::Notes { todo_id } => {
            let notes = client.list_notes(todo_id).await.map_err(|e| e.to_string())?;
            print_json(&notes)?;
        }

        Command::NoteAdd { todo_id, content } => {
            let note = client
                .create_note(todo_id, &CreateNote { content })
                .await
                .map_err(|e| e.to_string())?;
            print_json(&note)?;
        }

        Command::NoteEdit {
            todo_id,
            note_id,
            content,
        } => {
            let note = client
                .update_note(todo_id, note_id, &UpdateNote { content })
                .await
                .map_err(|e| e.to_string())?;
            print_json(&note)?;
        }

        Command::NoteRm { todo_id, note_id } => {
            client
                .delete_note(todo_id, note_id)
                .await
                .map_err(|e| e.to_string())?;
            println!("deleted note {} from todo {}", note_id, todo_id);
        }
    }

    Ok(())
}
