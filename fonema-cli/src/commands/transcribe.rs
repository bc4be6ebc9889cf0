//! Transcribe command implementation

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter, TranscriptionRecord};
use anyhow::{Context, Result};
use clap::Args;
use fonema_core::{ToneFormat, TranscribeError, Transcriber, TranscriptionRequest};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the transcribe command
#[derive(Debug, Args)]
pub struct TranscribeArgs {
    /// Text to transcribe directly
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file to read text from (stdin when neither --text nor --input)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Language code (see `fonema list languages`)
    #[arg(short, long, value_name = "CODE")]
    pub language: String,

    /// Tone notation for character-based languages
    #[arg(short, long, value_enum, default_value = "original")]
    pub format: FormatArg,

    /// Prefix each dictionary hit with its matched token form
    #[arg(long)]
    pub show_tokens: bool,

    /// Directory containing the dictionary JSON files
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit a JSON envelope instead of plain text
    #[arg(short, long)]
    pub json: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Tone formats accepted on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    /// Keep the IPA tone letters as-is
    Original,
    /// Numeric tone digits, length colons stripped
    Numeric,
    /// Jyutping tone digits
    Jyutping,
}

impl From<FormatArg> for ToneFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Original => ToneFormat::Original,
            FormatArg::Numeric => ToneFormat::Numeric,
            FormatArg::Jyutping => ToneFormat::Jyutping,
        }
    }
}

impl TranscribeArgs {
    /// Execute the transcribe command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting transcription");
        log::debug!("Arguments: {:?}", self);

        let text = self.read_text()?;
        let format = ToneFormat::from(self.format);

        let transcriber = Transcriber::new(&self.data_dir);
        let request = TranscriptionRequest::new(text, &self.language)
            .format(format)
            .show_tokens(self.show_tokens);

        let ipa = transcriber
            .transcribe(&request)
            .map_err(|e| self.describe_core_error(&transcriber, e))?;

        let record = TranscriptionRecord {
            ipa,
            language: self.language.clone(),
            format: format.as_str().to_string(),
        };
        self.write_record(&record)
    }

    /// Read the text to transcribe from argument, file, or stdin
    fn read_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return FileReader::read_text(path);
        }

        log::debug!("reading text from stdin");
        io::read_to_string(io::stdin()).context("Failed to read text from stdin")
    }

    /// Render the transcription through the selected output formatter
    fn write_record(&self, record: &TranscriptionRecord) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = if self.json {
            Box::new(JsonFormatter::new(writer))
        } else {
            Box::new(TextFormatter::new(writer))
        };

        formatter.write_record(record)?;
        formatter.finish()
    }

    /// Turn a core error into a user-facing message
    ///
    /// Unknown-language failures list the available codes so the caller
    /// does not need a second invocation to discover them.
    fn describe_core_error(
        &self,
        transcriber: &Transcriber,
        error: TranscribeError,
    ) -> anyhow::Error {
        let message = match &error {
            TranscribeError::UnsupportedLanguage { .. } => {
                format!(
                    "{error}. Available codes: {}",
                    transcriber.supported_languages().join(", ")
                )
            }
            TranscribeError::DictionaryUnavailable { .. } => error.to_string(),
        };
        CliError::TranscriptionError(message).into()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}
