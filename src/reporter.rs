//! Report driver: one build cycle in, one console report out.
//!
//! The host build system signals two lifecycle events per cycle: the cycle
//! starting (`on_cycle_start`) and the cycle finishing with a stats
//! document (`on_cycle_done`). Everything between extraction and printing
//! is pure (`cycle_blocks`), so tests assert on composed blocks instead of
//! captured stdout.

use crate::format::{format_all, Format};
use crate::formatters::builtin_formatters;
use crate::models::{Badge, Block, NormalizedError, RawError, Severity};
use crate::output::{Sink, Terminal};
use crate::stats::BuildStats;
use crate::transform::{max_severity_errors, transform_all, ChainPosition, Transform};
use crate::transformers::builtin_transformers;

/// Verbosity threshold. Raising the level suppresses successively more:
/// `Info` shows everything, `Silent` shows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
    Silent,
}

impl LogLevel {
    /// Parse a level name. Unrecognized values fall back to the most
    /// verbose level rather than silently suppressing output.
    pub fn parse(s: &str) -> LogLevel {
        match s.to_ascii_uppercase().as_str() {
            "WARNING" => LogLevel::Warning,
            "ERROR" => LogLevel::Error,
            "SILENT" => LogLevel::Silent,
            _ => LogLevel::Info,
        }
    }

    fn rank(self) -> u8 {
        match self {
            LogLevel::Info => 0,
            LogLevel::Warning => 1,
            LogLevel::Error => 2,
            LogLevel::Silent => 3,
        }
    }

    pub fn shows_success(self) -> bool {
        self.rank() < LogLevel::Warning.rank()
    }

    pub fn shows_warnings(self) -> bool {
        self.rank() < LogLevel::Error.rank()
    }

    pub fn shows_errors(self) -> bool {
        self.rank() < LogLevel::Silent.rank()
    }
}

/// Extra lines shown on a successful compile.
#[derive(Debug, Clone, Default)]
pub struct SuccessInfo {
    pub messages: Vec<String>,
    pub notes: Vec<String>,
}

/// Observability hook invoked with the severity-reduced errors before
/// formatting. Side-effect only; cannot alter the report.
pub type ErrorsHook = Box<dyn Fn(Severity, &[NormalizedError])>;

/// Construction-time reporter configuration. Immutable for the lifetime of
/// the reporter; independent reporters cannot interfere.
pub struct Options {
    pub success_info: SuccessInfo,
    pub on_errors: Option<ErrorsHook>,
    pub clear_console: bool,
    pub log_level: LogLevel,
    pub additional_transformers: Vec<Box<dyn Transform>>,
    pub additional_formatters: Vec<Box<dyn Format>>,
    /// Where the additional chain entries go relative to the built-ins.
    pub chain_position: ChainPosition,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            success_info: SuccessInfo::default(),
            on_errors: None,
            clear_console: true,
            log_level: LogLevel::Info,
            additional_transformers: Vec::new(),
            additional_formatters: Vec::new(),
            chain_position: ChainPosition::Append,
        }
    }
}

fn assemble<T>(builtins: Vec<T>, additions: Vec<T>, position: ChainPosition) -> Vec<T> {
    let mut chain = Vec::with_capacity(builtins.len() + additions.len());
    match position {
        ChainPosition::Append => {
            chain.extend(builtins);
            chain.extend(additions);
        }
        ChainPosition::Prepend => {
            chain.extend(additions);
            chain.extend(builtins);
        }
    }
    chain
}

pub struct Reporter {
    success_info: SuccessInfo,
    on_errors: Option<ErrorsHook>,
    clear_console: bool,
    log_level: LogLevel,
    transformers: Vec<Box<dyn Transform>>,
    formatters: Vec<Box<dyn Format>>,
    sink: Box<dyn Sink>,
    cleared: bool,
}

impl Reporter {
    pub fn new(options: Options) -> Self {
        Self::with_sink(options, Box::new(Terminal))
    }

    /// Construct a reporter writing to the given sink instead of the
    /// terminal.
    pub fn with_sink(options: Options, sink: Box<dyn Sink>) -> Self {
        Reporter {
            success_info: options.success_info,
            on_errors: options.on_errors,
            clear_console: options.clear_console,
            log_level: options.log_level,
            transformers: assemble(
                builtin_transformers(),
                options.additional_transformers,
                options.chain_position,
            ),
            formatters: assemble(
                builtin_formatters(),
                options.additional_formatters,
                options.chain_position,
            ),
            sink,
            cleared: false,
        }
    }

    /// The build tool invalidated its output; a new cycle is starting.
    pub fn on_cycle_start(&mut self) {
        self.cleared = false;
        if self.log_level.shows_errors() {
            self.print(Block::new(Badge::Info, "WAIT", "Compiling..."));
        }
    }

    /// A cycle finished; compose and print its report.
    pub fn on_cycle_done(&mut self, stats: &BuildStats) {
        self.cleared = false;
        for block in self.cycle_blocks(stats) {
            self.print(block);
        }
    }

    /// Compose the blocks a cycle's report consists of, without printing.
    ///
    /// Warnings come before errors when both are shown; errors dominate the
    /// cycle outcome either way.
    pub fn cycle_blocks(&self, stats: &BuildStats) -> Vec<Block> {
        let has_errors = stats.has_errors();
        let has_warnings = stats.has_warnings();
        let mut blocks = Vec::new();

        if !has_errors && !has_warnings {
            if self.log_level.shows_success() {
                blocks.push(self.success_block(stats));
            }
            return blocks;
        }
        if has_warnings && self.log_level.shows_warnings() {
            blocks.push(self.report_block(stats.extract(Severity::Warning), Severity::Warning));
        }
        if has_errors && self.log_level.shows_errors() {
            blocks.push(self.report_block(stats.extract(Severity::Error), Severity::Error));
        }
        blocks
    }

    fn success_block(&self, stats: &BuildStats) -> Block {
        let mut block = Block::new(
            Badge::Success,
            "DONE",
            format!("Compiled successfully in {}ms", stats.compile_time()),
        );
        block.body.extend(self.success_info.messages.iter().cloned());
        if !self.success_info.notes.is_empty() {
            if !block.body.is_empty() {
                block.body.push(String::new());
            }
            block.body.extend(self.success_info.notes.iter().cloned());
        }
        block
    }

    fn report_block(&self, raw: Vec<RawError>, severity: Severity) -> Block {
        let normalized = transform_all(&raw, &self.transformers);
        let top = max_severity_errors(normalized);
        let title = match severity {
            Severity::Error => format!("Failed to compile with {} errors", top.len()),
            Severity::Warning => format!("Compiled with {} warnings", top.len()),
        };
        if let Some(hook) = &self.on_errors {
            hook(severity, &top);
        }
        let badge = match severity {
            Severity::Error => Badge::Error,
            Severity::Warning => Badge::Warning,
        };
        let mut block = Block::new(badge, &severity.label().to_ascii_uppercase(), title);
        block.body = format_all(&top, &self.formatters, severity)
            .into_iter()
            .flatten()
            .collect();
        block
    }

    /// Print a block, clearing the console once before the first block of
    /// the current event.
    fn print(&mut self, block: Block) {
        if self.clear_console && !self.cleared {
            self.sink.clear();
        }
        self.cleared = true;
        self.sink.print(&block);
    }
}
