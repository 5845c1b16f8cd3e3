use anyhow::Result;
use clap::Parser;
use reqwest::Method;
use seo_api_client::commands::{self, RawRequest};
use seo_api_client::config::ClientConfig;
use seo_api_client::http::ApiClient;
use seo_api_client::seo::SeoClient;
use seo_api_client::shared::{init_shared, shared};

/// seo-api - client for the SEO checker backend
///
/// Requests go to the base URL from --base-url, else the API_URL environment
/// variable, else http://localhost:8000. Each request and each failure is
/// logged to stderr under the `seo_api_client` target (set RUST_LOG=warn to
/// silence request lines).
///
/// Examples:
///   seo-api health
///   seo-api check-domain example.com
///   seo-api post /check-url --data '{"url": "https://example.com"}'
#[derive(Parser, Debug)]
#[command(author, version = env!("SEO_API_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides API_URL)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Send a GET request to PATH
    Get(PathArgs),

    /// Send a DELETE request to PATH
    Delete(PathArgs),

    /// Send a POST request to PATH
    Post(BodyArgs),

    /// Send a PUT request to PATH
    Put(BodyArgs),

    /// Send a PATCH request to PATH
    Patch(BodyArgs),

    /// Check that the backend is up
    Health,

    /// Check technical and SEO data for a page
    CheckUrl(UrlArgs),

    /// Check DNS and HTTP status of a domain
    CheckDomain(DomainArgs),

    /// Check sitemap.xml of a domain
    CheckSitemap(DomainArgs),

    /// List URLs from a sitemap file
    FetchSitemapUrls(SitemapArgs),
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Path relative to the base URL, or an absolute URL
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(clap::Args, Debug)]
pub struct BodyArgs {
    /// Path relative to the base URL, or an absolute URL
    #[arg(value_name = "PATH")]
    pub path: String,

    /// JSON request body
    #[arg(long, short = 'd', value_name = "JSON")]
    pub data: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct UrlArgs {
    #[arg(value_name = "URL")]
    pub url: String,
}

#[derive(clap::Args, Debug)]
pub struct DomainArgs {
    /// Domain or full URL; https:// is assumed when the scheme is missing
    #[arg(value_name = "DOMAIN")]
    pub domain: String,
}

#[derive(clap::Args, Debug)]
pub struct SitemapArgs {
    #[arg(value_name = "SITEMAP_URL")]
    pub sitemap_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let client = match cli.base_url.as_deref() {
        Some(url) => init_shared(ApiClient::new(ClientConfig::new(Some(url)))?),
        None => shared()?,
    };
    let api = SeoClient::new(client.clone());
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Get(args) => {
            let request = RawRequest::new(Method::GET, args.path, None);
            commands::raw(client, request, &mut stdout).await?
        }
        Commands::Delete(args) => {
            let request = RawRequest::new(Method::DELETE, args.path, None);
            commands::raw(client, request, &mut stdout).await?
        }
        Commands::Post(args) => {
            let request = RawRequest::new(Method::POST, args.path, args.data);
            commands::raw(client, request, &mut stdout).await?
        }
        Commands::Put(args) => {
            let request = RawRequest::new(Method::PUT, args.path, args.data);
            commands::raw(client, request, &mut stdout).await?
        }
        Commands::Patch(args) => {
            let request = RawRequest::new(Method::PATCH, args.path, args.data);
            commands::raw(client, request, &mut stdout).await?
        }
        Commands::Health => commands::health(&api, &mut stdout).await?,
        Commands::CheckUrl(args) => commands::check_url(&api, &args.url, &mut stdout).await?,
        Commands::CheckDomain(args) => {
            commands::check_domain(&api, &args.domain, &mut stdout).await?
        }
        Commands::CheckSitemap(args) => {
            commands::check_sitemap(&api, &args.domain, &mut stdout).await?
        }
        Commands::FetchSitemapUrls(args) => {
            commands::fetch_sitemap_urls(&api, &args.sitemap_url, &mut stdout).await?
        }
    }
    Ok(())
}
