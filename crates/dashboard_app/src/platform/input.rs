//! Line commands typed into the dashboard's terminal.

use std::path::PathBuf;

use dashboard_core::Msg;

pub const HELP: &str = "commands: upload <file> | select [file] | submit | folder <path> | \
start [path] | stop | dismiss <id> | refresh | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Vec<Msg>),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, arg) = match line.trim_start().split_once(' ') {
        Some((verb, arg)) => (verb, Some(arg)),
        None => (line.trim(), None),
    };

    match (verb, arg) {
        ("", None) => Command::Send(Vec::new()),
        ("upload", Some(path)) if !path.trim().is_empty() => Command::Send(vec![
            Msg::UploadFileSelected(Some(PathBuf::from(path.trim()))),
            Msg::UploadSubmitted,
        ]),
        ("select", Some(path)) if !path.trim().is_empty() => {
            Command::Send(vec![Msg::UploadFileSelected(Some(PathBuf::from(path.trim())))])
        }
        ("select", _) => Command::Send(vec![Msg::UploadFileSelected(None)]),
        ("submit", None) => Command::Send(vec![Msg::UploadSubmitted]),
        ("folder", arg) => Command::Send(vec![Msg::FolderInputChanged(
            arg.unwrap_or_default().to_string(),
        )]),
        // The folder is passed untrimmed; validation happens on click.
        ("start", Some(folder)) => Command::Send(vec![
            Msg::FolderInputChanged(folder.to_string()),
            Msg::StartClicked,
        ]),
        ("start", None) => Command::Send(vec![Msg::StartClicked]),
        ("stop", None) => Command::Send(vec![Msg::StopClicked]),
        ("dismiss", Some(id)) => match id.trim().parse() {
            Ok(id) => Command::Send(vec![Msg::NotificationDismissed(id)]),
            Err(_) => Command::Invalid(format!("not a notification id: {}", id.trim())),
        },
        ("refresh", None) => Command::Send(vec![Msg::PollTick]),
        ("help", _) | ("?", _) => Command::Help,
        ("quit", None) | ("exit", None) => Command::Quit,
        _ => Command::Invalid(format!("unknown command: {}", line.trim())),
    }
}
