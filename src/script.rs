//! Line-oriented command scripts
//!
//! One command per line; blank lines and `#` comments are ignored.
//!
//! ```text
//! insert 10 20 30     # each key is logged as its own operation
//! delete 20
//! search 10
//! clear
//! undo
//! redo
//! print inorder       # inorder | preorder | postorder
//! layout
//! stats
//! ```
//!
//! Parsing validates user text into keys; the session itself never sees
//! malformed input. A script is parsed completely before anything runs.

use thiserror::Error;

use crate::tree::{Node, TraversalOrder};
use crate::TreeSession;

/// Key type accepted by scripts
pub type ScriptKey = i64;

/// Errors produced while parsing a script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// First word is not a known command
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// Offending word
        command: String,
    },

    /// Required argument absent
    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        /// 1-based line number
        line: usize,
        /// Command name
        command: &'static str,
        /// Description of the missing argument
        expected: &'static str,
    },

    /// Argument given to a command that takes none, or too many
    #[error("line {line}: unexpected argument '{token}' for '{command}'")]
    UnexpectedArgument {
        /// 1-based line number
        line: usize,
        /// Command name
        command: &'static str,
        /// Extra token
        token: String,
    },

    /// Key is not an integer
    #[error("line {line}: invalid key '{token}'")]
    InvalidKey {
        /// 1-based line number
        line: usize,
        /// Token that failed to parse
        token: String,
    },

    /// Unknown traversal order
    #[error("line {line}: {message}")]
    InvalidOrder {
        /// 1-based line number
        line: usize,
        /// Parser message
        message: String,
    },
}

/// One parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert each key in turn
    Insert(Vec<ScriptKey>),
    /// Delete each key in turn
    Delete(Vec<ScriptKey>),
    /// Search for one key
    Search(ScriptKey),
    /// Empty the tree
    Clear,
    /// Step back in history
    Undo,
    /// Step forward in history
    Redo,
    /// Print a traversal
    Print(TraversalOrder),
    /// Print node positions and bounds
    Layout,
    /// Print size, height and history state
    Stats,
}

/// Parse a whole script; returns `(line number, command)` pairs
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        if let Some(command) = parse_line(idx + 1, text)? {
            commands.push((idx + 1, command));
        }
    }
    Ok(commands)
}

/// Parse one line; `None` for blank or comment-only lines
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = text.split('#').next().unwrap_or("");
    let mut tokens = text.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = tokens.collect();

    let command = match word.to_ascii_lowercase().as_str() {
        "insert" => Command::Insert(parse_keys(line, "insert", &rest)?),
        "delete" => Command::Delete(parse_keys(line, "delete", &rest)?),
        "search" => {
            let keys = parse_keys(line, "search", &rest)?;
            if keys.len() > 1 {
                return Err(ScriptError::UnexpectedArgument {
                    line,
                    command: "search",
                    token: rest[1].to_string(),
                });
            }
            Command::Search(keys[0])
        }
        "clear" => no_arguments(line, "clear", &rest, Command::Clear)?,
        "undo" => no_arguments(line, "undo", &rest, Command::Undo)?,
        "redo" => no_arguments(line, "redo", &rest, Command::Redo)?,
        "layout" => no_arguments(line, "layout", &rest, Command::Layout)?,
        "stats" => no_arguments(line, "stats", &rest, Command::Stats)?,
        "print" => {
            let (order, extra) = match rest.as_slice() {
                [] => {
                    return Err(ScriptError::MissingArgument {
                        line,
                        command: "print",
                        expected: "a traversal order",
                    })
                }
                [order, extra @ ..] => (order, extra),
            };
            if let Some(token) = extra.first() {
                return Err(ScriptError::UnexpectedArgument {
                    line,
                    command: "print",
                    token: token.to_string(),
                });
            }
            let order = order
                .parse::<TraversalOrder>()
                .map_err(|message| ScriptError::InvalidOrder { line, message })?;
            Command::Print(order)
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: word.to_string(),
            })
        }
    };
    Ok(Some(command))
}

fn parse_keys(
    line: usize,
    command: &'static str,
    tokens: &[&str],
) -> Result<Vec<ScriptKey>, ScriptError> {
    if tokens.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "at least one integer key",
        });
    }
    tokens
        .iter()
        .map(|token| {
            token.parse::<ScriptKey>().map_err(|_| ScriptError::InvalidKey {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

fn no_arguments(
    line: usize,
    command: &'static str,
    tokens: &[&str],
    parsed: Command,
) -> Result<Command, ScriptError> {
    match tokens.first() {
        Some(token) => Err(ScriptError::UnexpectedArgument {
            line,
            command,
            token: token.to_string(),
        }),
        None => Ok(parsed),
    }
}

/// Run one command against `session`, returning the lines to print
pub fn execute(session: &mut TreeSession<ScriptKey>, command: &Command) -> Vec<String> {
    match command {
        Command::Insert(keys) => keys
            .iter()
            .map(|&key| {
                let report = session.insert(key);
                if !report.changed {
                    format!("insert {key}: duplicate, ignored")
                } else if report.rotations.is_empty() {
                    format!("insert {key}: inserted")
                } else {
                    format!("insert {key}: inserted, rotations {}", join(&report.rotations))
                }
            })
            .collect(),
        Command::Delete(keys) => keys
            .iter()
            .map(|&key| {
                let report = session.delete(key);
                if !report.changed {
                    format!("delete {key}: not found")
                } else if report.rotations.is_empty() {
                    format!("delete {key}: deleted")
                } else {
                    format!("delete {key}: deleted, rotations {}", join(&report.rotations))
                }
            })
            .collect(),
        Command::Search(key) => match session.search(*key) {
            Some(id) => vec![format!("search {key}: found {id}")],
            None => vec![format!("search {key}: not found")],
        },
        Command::Clear => {
            session.clear();
            vec!["clear".to_string()]
        }
        Command::Undo => vec![if session.undo() {
            format!("undo: size={}", session.size())
        } else {
            "undo: nothing to undo".to_string()
        }],
        Command::Redo => vec![if session.redo() {
            format!("redo: size={}", session.size())
        } else {
            "redo: nothing to redo".to_string()
        }],
        Command::Print(order) => vec![format!("{order}: {}", join(&session.traverse(*order)))],
        Command::Layout => render_layout(session),
        Command::Stats => vec![render_stats(session)],
    }
}

/// Parse then execute a whole script
pub fn run_script(
    session: &mut TreeSession<ScriptKey>,
    source: &str,
) -> Result<Vec<String>, ScriptError> {
    let commands = parse_script(source)?;
    Ok(commands
        .iter()
        .flat_map(|(_, command)| execute(session, command))
        .collect())
}

/// One line per node in preorder, then the bounding box
pub fn render_layout(session: &TreeSession<ScriptKey>) -> Vec<String> {
    let layout = session.layout();
    let mut lines = Vec::with_capacity(layout.len() + 1);
    let mut stack: Vec<&Node<ScriptKey>> = session.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        if let Some(pos) = layout.position(node.id()) {
            lines.push(format!(
                "{}\tkey={}\tx={:.1}\ty={:.1}\tlevel={}",
                node.id(),
                node.key(),
                pos.x,
                pos.y,
                pos.level
            ));
        }
        stack.extend(node.right());
        stack.extend(node.left());
    }
    let bounds = layout.bounds;
    lines.push(format!(
        "bounds\tmin_x={:.1}\tmin_y={:.1}\twidth={:.1}\theight={:.1}\tedges={}",
        bounds.min_x,
        bounds.min_y,
        bounds.width,
        bounds.height,
        layout.connections.len()
    ));
    lines
}

/// Size, height and history cursor on one line
pub fn render_stats(session: &TreeSession<ScriptKey>) -> String {
    let history = session.history();
    let cursor = history
        .current_index()
        .map_or_else(|| "-".to_string(), |cursor| cursor.to_string());
    format!(
        "size={}\theight={}\toperations={}\tcursor={}\tcan_undo={}\tcan_redo={}",
        session.size(),
        session.height(),
        history.len(),
        cursor,
        session.can_undo(),
        session.can_redo()
    )
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
