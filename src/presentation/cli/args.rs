use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wiki-articles")]
#[command(about = "Inspect and edit wiki articles and their history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Service base URL (overrides ARTICLES_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an article
    Create {
        page_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        source: Option<String>,
        /// Tag to attach; repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        parent: Option<String>,
        #[arg(long)]
        locked: bool,
    },

    /// Fetch an article
    Get { page_id: String },

    /// Update an article in place
    Update {
        page_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        source: Option<String>,
        /// Replace the tag set; repeatable
        #[arg(long = "tag")]
        tags: Option<Vec<String>>,
        #[arg(long)]
        parent: Option<String>,
        #[arg(long)]
        locked: Option<bool>,
        /// Move the article to a new page id
        #[arg(long)]
        rename_to: Option<String>,
    },

    /// Delete an article
    Delete { page_id: String },

    /// Show the revision log
    Log {
        page_id: String,
        #[arg(long, default_value_t = 0)]
        from: u64,
        /// Window end (exclusive); defaults to from + 25
        #[arg(long)]
        to: Option<u64>,
        /// Page through the whole history
        #[arg(long, conflicts_with_all = ["from", "to"])]
        all: bool,
    },

    /// Make an old revision current again
    Revert { page_id: String, rev_number: u64 },

    /// Show one revision's source and rendered output
    Version {
        page_id: String,
        rev_number: u64,
        /// Path context as key=value; repeatable
        #[arg(long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },

    /// Show children, includes and links
    Links { page_id: String },

    /// Show or clear the voting aggregate
    Votes {
        page_id: String,
        #[arg(long)]
        delete: bool,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}
