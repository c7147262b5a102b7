use std::ffi::OsString;

pub use clap::Parser;

use crate::config::default_user_agent;
use crate::http::models::OptionBag;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    override_usage = "fetch [options...] <url>"
)]
struct ClapArgs {
    /// HTTP POST data; `@path` reads it from a file
    #[clap(short = 'd', long, value_name = "DATA")]
    data: Option<String>,

    /// Custom header to pass to server, `name:value`
    #[clap(short = 'H', long = "header", value_name = "LINE")]
    headers: Vec<String>,

    /// Show document info only
    #[clap(short = 'I', long)]
    head: bool,

    /// Include protocol headers in the output
    #[clap(short = 'i', long)]
    include: bool,

    /// Allow connections to SSL sites without certs
    #[clap(short = 'k', long)]
    insecure: bool,

    /// Follow redirects
    #[clap(short = 'L', long)]
    location: bool,

    /// Specify request method to use
    #[clap(short = 'X', long = "request", value_name = "METHOD")]
    request: Option<String>,

    /// URL to work with; overrides the positional URL
    #[clap(long = "url", value_name = "URL")]
    url_flag: Option<String>,

    /// Server user and password
    #[clap(short = 'u', long, value_name = "USER[:PASSWORD]")]
    user: Option<String>,

    /// User-Agent to send to server
    #[clap(short = 'A', long, value_name = "STRING", default_value_t = default_user_agent())]
    user_agent: String,

    /// URL to work with
    #[clap(value_name = "URL")]
    url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    options: OptionBag,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Self::from)
    }

    pub fn options(&self) -> &OptionBag {
        &self.options
    }

    pub fn into_option_bag(self) -> OptionBag {
        self.options
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            options: OptionBag {
                url: args.url_flag,
                positional_url: args.url,
                method: args.request,
                header_lines: args.headers,
                data: args.data,
                user: args.user,
                user_agent: args.user_agent,
                insecure_tls: args.insecure,
                follow_redirects: args.location,
                show_headers_only: args.head,
                include_headers: args.include,
            },
        }
    }
}
