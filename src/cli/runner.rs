//! CLI runner - executes commands

use crate::cli::commands::{Action, Cli, Commands, MetadataArgs, ReplCommand};
use crate::cli::view::ListView;
use crate::error::{Error, Result};
use crate::loader::{load_metadata, load_metadata_from_json};
use crate::pagination::{ListMetadata, Pagination};
use crate::state::PaginationStore;
use crate::types::OutputFormat;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Show { metadata } => {
                let store = PaginationStore::from_metadata(&resolve_metadata(metadata)?);
                self.show(&store, &mut std::io::stdout().lock())
            }
            Commands::Navigate {
                metadata,
                actions,
                trace,
            } => {
                let store = PaginationStore::from_metadata(&resolve_metadata(metadata)?);
                self.navigate(&store, actions, *trace, &mut std::io::stdout().lock())
            }
            Commands::Repl { metadata } => {
                let store = if metadata.is_empty() {
                    PaginationStore::new()
                } else {
                    PaginationStore::from_metadata(&resolve_metadata(metadata)?)
                };
                let input = BufReader::new(tokio::io::stdin());
                run_repl(store, input, std::io::stdout(), self.cli.format).await?;
                Ok(())
            }
        }
    }

    /// Print the current state
    pub fn show(&self, store: &PaginationStore, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", render(&store.current(), self.cli.format)?)?;
        Ok(())
    }

    /// Apply actions in order, printing the final state (or every step when tracing)
    pub fn navigate(
        &self,
        store: &PaginationStore,
        actions: &[Action],
        trace: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        if trace {
            self.show(store, out)?;
        }

        for action in actions {
            let state = apply_action(store, *action);
            if trace {
                writeln!(out, "{}", render(&state, self.cli.format)?)?;
            }
        }

        if !trace {
            self.show(store, out)?;
        }
        Ok(())
    }
}

/// Build list metadata from CLI arguments
///
/// `--current-page` overrides the page from a metadata file.
pub fn resolve_metadata(args: &MetadataArgs) -> Result<ListMetadata> {
    let mut metadata = if let Some(path) = &args.metadata {
        load_metadata(path)?
    } else if let Some(json) = &args.metadata_json {
        load_metadata_from_json(json)?
    } else {
        let total = args.total.ok_or_else(|| Error::missing_field("total"))?;
        let per_page = args.per_page.ok_or_else(|| Error::missing_field("per_page"))?;
        ListMetadata::new(total, per_page)
    };

    if let Some(page) = args.current_page {
        metadata.current_page = Some(page);
    }

    debug!(?metadata, "Resolved list metadata");
    Ok(metadata)
}

/// Apply one navigation action to the store
pub fn apply_action(store: &PaginationStore, action: Action) -> Pagination {
    match action {
        Action::Next => store.advance(),
        Action::Prev => store.retreat(),
        Action::First => store.reset(),
    }
}

/// Render a snapshot in the requested format
pub fn render(pagination: &Pagination, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(pagination)?),
        OutputFormat::Pretty => Ok(ListView::from(pagination).to_string()),
    }
}

/// Text queued for the writer task, with a signal sent once it is written
type Queued = (String, oneshot::Sender<()>);

/// Run an interactive session
///
/// Commands are read line by line and applied to the store. After each
/// command the session checks its store subscription and prints the new
/// snapshot if the state changed, followed by any reply to the command. A
/// writer task owns the output, and the session waits for every line to be
/// written before reading the next command, so output stays in command
/// order. No-op navigation prints nothing.
///
/// The session ends at end of input, on `quit`, or as soon as the output
/// can no longer be written. Returns the writer, or the write error.
pub async fn run_repl<R, W>(
    store: PaginationStore,
    input: R,
    output: W,
    format: OutputFormat,
) -> Result<W>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let (queue, pending) = mpsc::unbounded_channel::<Queued>();
    let writer = tokio::spawn(write_loop(pending, output));
    let mut changes = store.subscribe();

    let mut lines = input.lines();
    'session: while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match line.parse::<ReplCommand>() {
            Ok(ReplCommand::Init {
                total,
                per_page,
                current_page,
            }) => {
                store.initialize(total, per_page, current_page);
                None
            }
            Ok(ReplCommand::Navigate(action)) => {
                apply_action(&store, action);
                None
            }
            Ok(ReplCommand::Show) => Some(render(&store.current(), format)?),
            Ok(ReplCommand::Help) => Some(ReplCommand::HELP.to_string()),
            Ok(ReplCommand::Quit) => break,
            Err(e) => {
                warn!("Rejected command '{}': {}", line, e);
                Some(format!("error: {e}"))
            }
        };

        let mut outgoing = Vec::with_capacity(2);
        if changes.has_changed().unwrap_or(false) {
            let snapshot = *changes.borrow_and_update();
            outgoing.push(render(&snapshot, format)?);
        }
        outgoing.extend(reply);

        for text in outgoing {
            if !emit(&queue, text).await {
                warn!("Output closed, ending interactive session");
                break 'session;
            }
        }
    }

    info!("Interactive session ended");
    drop(queue);
    writer
        .await
        .map_err(|e| Error::Other(format!("Writer task failed: {e}")))?
}

/// Queue a line and wait until the writer task has written it
///
/// Returns false once the writer has stopped.
async fn emit(queue: &mpsc::UnboundedSender<Queued>, text: String) -> bool {
    let (done, written) = oneshot::channel();
    queue.send((text, done)).is_ok() && written.await.is_ok()
}

/// Write queued lines in order until the queue closes
async fn write_loop<W: Write>(
    mut pending: mpsc::UnboundedReceiver<Queued>,
    mut output: W,
) -> Result<W> {
    while let Some((text, done)) = pending.recv().await {
        writeln!(output, "{text}")?;
        output.flush()?;
        if done.send(()).is_err() {
            break;
        }
    }

    Ok(output)
}
