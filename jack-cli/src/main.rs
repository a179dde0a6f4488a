//! Jack CLI - drives the Jack front end from the command line.
//! Jack CLI - 从命令行驱动 Jack 前端。

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "jack")]
#[command(author, version, about = "Jack - syntax analysis for the Jack teaching language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output, including parser trace logs. / 启用详细输出，包括解析器跟踪日志。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a file, one per line. / 逐行打印文件的词法单元。
    Tokens {
        /// The file to tokenize. / 要进行词法分析的文件。
        file: String,
    },

    /// Parse a file and print its parse tree. / 解析文件并打印语法树。
    Parse {
        /// The file to parse. / 要解析的文件。
        file: String,
        /// Print the tree as JSON. / 以 JSON 格式打印语法树。
        #[arg(long)]
        json: bool,
        /// Draw the outline with ASCII characters. / 使用 ASCII 字符绘制树形轮廓。
        #[arg(long)]
        ascii: bool,
    },

    /// Check that a file parses. / 检查文件能否通过解析。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    output::init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Tokens { file } => commands::tokens::run(&file),
        Commands::Parse { file, json, ascii } => commands::parse::run(&file, json, ascii),
        Commands::Check { file } => commands::check::run(&file, cli.verbose),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
