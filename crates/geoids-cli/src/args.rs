use clap::Parser;
use geoids_core::{IdentifierFormat, ShortRowPolicy, TransformOptions};

/// CLI arguments for geoids
#[derive(Debug, Parser)]
#[command(
    name = "geoids",
    version,
    about = "Converts GeoNames city/country datasets into a flat name-to-GeoID lookup file"
)]
pub struct CliArgs {
    /// Identifier format: 'uri' emits pipe-delimited GeoNames URIs,
    /// 'raw' emits space-delimited numeric IDs
    #[arg(short = 'f', long = "format", default_value = "uri")]
    pub format: IdentifierFormat,

    /// Keep city rows whose ASCII-name column is empty (the historical
    /// default for 'raw')
    #[arg(long, conflicts_with = "skip_empty_names")]
    pub include_empty_names: bool,

    /// Drop city rows whose ASCII-name column is empty (the historical
    /// default for 'uri')
    #[arg(long)]
    pub skip_empty_names: bool,

    /// Drop city rows with fewer than 3 columns instead of aborting
    #[arg(long)]
    pub skip_short_rows: bool,
}

impl CliArgs {
    /// Maps the flag surface onto core options. Unless overridden, the
    /// empty-name behavior follows the format's historical pairing.
    pub fn to_options(&self) -> TransformOptions {
        let mut options = TransformOptions::for_format(self.format);
        if self.include_empty_names {
            options.skip_empty_names = false;
        }
        if self.skip_empty_names {
            options.skip_empty_names = true;
        }
        if self.skip_short_rows {
            options.short_rows = ShortRowPolicy::Skip;
        }
        options
    }
}
