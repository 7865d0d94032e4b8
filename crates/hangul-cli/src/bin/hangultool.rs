use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hangul_cli::commands::{config_ops, convert_ops, query_ops};
use hangul_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "hangultool", about = "Hangul romanization and jamo tool")]
struct Cli {
    /// Custom romanization table (TOML with a [table] section)
    #[arg(long, global = true)]
    table: Option<String>,
    /// Custom settings file (TOML with a [delimiters] section)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSONL traces to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_log: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize Hangul syllables: 가나다 -> [ga][na][da]
    Romanize {
        /// Input text (reads lines from stdin when omitted)
        text: Option<String>,
        /// String placed before each syllable
        #[arg(long)]
        prefix: Option<String>,
        /// String placed after each syllable
        #[arg(long)]
        postfix: Option<String>,
    },
    /// Convert bracketed romanizations back: [ga][na][da] -> 가나다
    Unromanize {
        /// Input text (reads lines from stdin when omitted)
        text: Option<String>,
        /// Opening delimiter character
        #[arg(long)]
        prefix: Option<char>,
        /// Closing delimiter character
        #[arg(long)]
        postfix: Option<char>,
    },
    /// Show the jamo indices and labels of each character
    Decompose {
        /// Input text (reads lines from stdin when omitted)
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build a syllable from jamo indices
    Compose {
        /// Initial consonant index (0..19)
        initial: u32,
        /// Vowel index (0..21)
        medial: u32,
        /// Final consonant index (0..28, 0 for none)
        #[arg(value_name = "FINAL")]
        final_: u32,
    },
    /// Whether the last syllable has a final consonant (true/false/undefined)
    HasFinal {
        /// Input text (reads lines from stdin when omitted)
        text: Option<String>,
    },
    /// Append the particle form that fits the word, e.g. 수공 를 을 -> 수공을
    Postfix {
        /// Particle after an open syllable or non-Hangul (를, 는, 가, 로)
        no_consonant: String,
        /// Particle after a final consonant (을, 은, 이, 으로)
        consonant: String,
        /// Word (reads lines from stdin when omitted)
        word: Option<String>,
    },
    /// Index heading: initial jamo for Hangul, uppercase otherwise
    Initial {
        /// Input text (reads lines from stdin when omitted)
        text: Option<String>,
    },
    /// Whether the text consists only of bare jamo like ㅋㅋ
    IsJamos {
        /// Input text (reads lines from stdin when omitted)
        text: Option<String>,
    },
    /// Export the built-in romanization table as TOML
    TableExport,
    /// Validate a custom romanization table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = init_tracing(cli.trace_log.as_deref());
    config_ops::install_custom(cli.table.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Romanize {
            text,
            prefix,
            postfix,
        } => convert_ops::romanize_cmd(text.as_deref(), prefix.as_deref(), postfix.as_deref()),
        Command::Unromanize {
            text,
            prefix,
            postfix,
        } => convert_ops::unromanize_cmd(text.as_deref(), prefix, postfix),
        Command::Decompose { text, json } => convert_ops::decompose_cmd(text.as_deref(), json),
        Command::Compose {
            initial,
            medial,
            final_,
        } => convert_ops::compose_cmd(initial, medial, final_),
        Command::HasFinal { text } => query_ops::has_final_cmd(text.as_deref()),
        Command::Postfix {
            no_consonant,
            consonant,
            word,
        } => query_ops::postfix_cmd(word.as_deref(), &no_consonant, &consonant),
        Command::Initial { text } => query_ops::initial_cmd(text.as_deref()),
        Command::IsJamos { text } => query_ops::is_jamos_cmd(text.as_deref()),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
