use std::io::{self, BufRead, Write};

use tablescout_core::{Console, ScoutError};

/// Console bound to stdin and stdout. Reads run on the blocking thread pool
/// so the runtime keeps breathing while the diner types.
#[derive(Clone, Copy, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Console for TerminalConsole {
    fn say(&self, line: &str) {
        println!("{}", line);
    }

    async fn ask(&self, prompt: &str) -> Result<String, ScoutError> {
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            let mut stdout = io::stdout();
            write!(stdout, "{}", prompt).map_err(|err| ScoutError::Console(err.to_string()))?;
            stdout
                .flush()
                .map_err(|err| ScoutError::Console(err.to_string()))?;

            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .map_err(|err| ScoutError::Console(err.to_string()))?;
            Ok(line.trim().to_string())
        })
        .await
        .map_err(|err| ScoutError::Console(err.to_string()))?
    }
}
