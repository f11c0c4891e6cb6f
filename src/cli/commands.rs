//! CLI commands and argument parsing

use crate::api::ItemsQuery;
use crate::pagination::Direction;
use crate::types::ContentFlags;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command line client for the pr0gramm API
#[derive(Parser, Debug)]
#[command(name = "pr0gramm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Cookie string restoring a session, e.g. `me=...`
    #[arg(long, global = true)]
    pub cookie: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single page of items
    Items {
        /// Page direction relative to ID
        #[arg(value_enum)]
        direction: PageDirection,

        /// Cursor item id
        id: u64,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Stream items page after page until the end of the sequence
    Stream {
        /// Stream direction relative to ID
        #[arg(value_enum)]
        direction: StreamDirection,

        /// Start cursor (not included in the output)
        id: u64,

        /// Stop after this many items
        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show tags and comments of an item
    Info {
        /// Item id
        item_id: u64,
    },

    /// Show the session restored from the cookie
    Whoami,
}

/// Item filters shared by `items` and `stream`
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Content flags, comma separated (sfw,nsfw,nsfl,nsfp,pol,all) or numeric
    #[arg(long, default_value = "sfw")]
    pub flags: ContentFlags,

    /// Tag search expression
    #[arg(long)]
    pub tags: Option<String>,

    /// Only uploads of this user
    #[arg(long)]
    pub user: Option<String>,

    /// Only promoted items
    #[arg(long)]
    pub promoted: bool,

    /// Favourites of this user
    #[arg(long)]
    pub likes: Option<String>,
}

impl FilterArgs {
    /// Build the items query
    pub fn to_query(&self) -> ItemsQuery {
        ItemsQuery {
            flags: self.flags,
            tags: self.tags.clone(),
            user: self.user.clone(),
            promoted: self.promoted,
            likes: self.likes.clone(),
            self_only: false,
        }
    }
}

/// Direction of a one-shot page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageDirection {
    Newer,
    Older,
    Around,
}

impl From<PageDirection> for Direction {
    fn from(direction: PageDirection) -> Self {
        match direction {
            PageDirection::Newer => Direction::Newer,
            PageDirection::Older => Direction::Older,
            PageDirection::Around => Direction::Around,
        }
    }
}

/// Direction of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StreamDirection {
    Newer,
    Older,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_command() {
        let cli = Cli::try_parse_from([
            "pr0gramm",
            "items",
            "around",
            "4711",
            "--flags",
            "sfw,nsfw",
            "--promoted",
        ])
        .unwrap();

        let Commands::Items {
            direction,
            id,
            filters,
        } = cli.command
        else {
            panic!("Expected Items");
        };
        assert_eq!(direction, PageDirection::Around);
        assert_eq!(id, 4711);

        let query = filters.to_query();
        assert_eq!(query.flags, ContentFlags::SFW | ContentFlags::NSFW);
        assert!(query.promoted);
        assert!(query.tags.is_none());
    }

    #[test]
    fn test_parse_stream_command_with_globals() {
        let cli = Cli::try_parse_from([
            "pr0gramm",
            "stream",
            "older",
            "100",
            "--limit",
            "5",
            "--tags",
            "katze",
            "--cookie",
            "me=x",
            "-f",
            "pretty",
        ])
        .unwrap();

        assert_eq!(cli.cookie.as_deref(), Some("me=x"));
        assert_eq!(cli.format, OutputFormat::Pretty);
        let Commands::Stream {
            direction,
            limit,
            filters,
            ..
        } = cli.command
        else {
            panic!("Expected Stream");
        };
        assert_eq!(direction, StreamDirection::Older);
        assert_eq!(limit, Some(5));
        assert_eq!(filters.flags, ContentFlags::SFW);
        assert_eq!(filters.tags.as_deref(), Some("katze"));
    }

    #[test]
    fn test_parse_rejects_bad_flags_and_direction() {
        assert!(Cli::try_parse_from(["pr0gramm", "items", "newer", "1", "--flags", "cats"]).is_err());
        assert!(Cli::try_parse_from(["pr0gramm", "stream", "around", "1"]).is_err());
    }
}
