//! System clipboard backends.
//!
//! [`SystemClipboard`] talks to the platform clipboard directly. [`CommandClipboard`] pipes the
//! text into whichever clipboard utility is installed. On Linux the selection is only served while
//! its owner is alive, so the utilities (which fork a daemon holding it) go first there and the
//! system clipboard blocks until another program takes the selection over.

use arboard::Clipboard as Arboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;
use gallery_core::clipboard::{Clipboard, ClipboardError, FallbackClipboard};
use std::io::Write;
use std::process::{Command, Stdio};

pub struct SystemClipboard {
    inner: Option<Arboard>,
}

impl SystemClipboard {
    pub fn new() -> SystemClipboard {
        let inner = match Arboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::debug!("System clipboard unavailable: {}", e);
                None
            }
        };
        SystemClipboard { inner }
    }

    #[cfg(target_os = "linux")]
    fn write(clipboard: &mut Arboard, text: &str) -> Result<(), arboard::Error> {
        clipboard.set().wait().text(text)
    }

    #[cfg(not(target_os = "linux"))]
    fn write(clipboard: &mut Arboard, text: &str) -> Result<(), arboard::Error> {
        clipboard.set_text(text)
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        "system clipboard"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.inner.as_mut() {
            Some(clipboard) => Self::write(clipboard, text)
                .map_err(|e| ClipboardError::unavailable("system clipboard", e)),
            None => Err(ClipboardError::unavailable(
                "system clipboard",
                "could not connect to the platform clipboard",
            )),
        }
    }
}

/// Clipboard utilities tried in order, with their arguments.
#[cfg(target_os = "linux")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(not(target_os = "linux"))]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[]), ("clip", &[])];

pub struct CommandClipboard {
    commands: Vec<(String, Vec<String>)>,
}

impl Default for CommandClipboard {
    fn default() -> Self {
        let commands = COPY_COMMANDS
            .iter()
            .map(|(program, args)| {
                (
                    program.to_string(),
                    args.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        CommandClipboard { commands }
    }
}

impl CommandClipboard {
    pub fn with_commands(commands: Vec<(String, Vec<String>)>) -> CommandClipboard {
        CommandClipboard { commands }
    }

    fn pipe_to(program: &str, args: &[String], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        // reap the child even when it closed its stdin early
        let status = child.wait();
        written?;
        Ok(status?.success())
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        "clipboard command"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in &self.commands {
            match Self::pipe_to(program, args, text) {
                Ok(true) => {
                    log::debug!("Copied text with {}", program);
                    return Ok(());
                }
                Ok(false) => log::debug!("{} exited with an error", program),
                Err(e) => log::debug!("{} not usable: {}", program, e),
            }
        }
        Err(ClipboardError::unavailable(
            "clipboard command",
            "no working clipboard utility found",
        ))
    }
}

#[cfg(target_os = "linux")]
pub type DefaultClipboard = FallbackClipboard<CommandClipboard, SystemClipboard>;

#[cfg(not(target_os = "linux"))]
pub type DefaultClipboard = FallbackClipboard<SystemClipboard, CommandClipboard>;

#[cfg(target_os = "linux")]
pub fn default_clipboard() -> DefaultClipboard {
    FallbackClipboard::new(CommandClipboard::default(), SystemClipboard::new())
}

#[cfg(not(target_os = "linux"))]
pub fn default_clipboard() -> DefaultClipboard {
    FallbackClipboard::new(SystemClipboard::new(), CommandClipboard::default())
}
