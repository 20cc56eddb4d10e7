use clap::Subcommand;
use url::Url;

use crate::client::{CatalogPage, Container, HttpCatalogSource};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Render the catalog page fragment from a running service",
        long_about = "Fetch /api/cheeses from a running service and print the card markup the catalog page would show, or its empty/failure message."
    )]
    Render {
        #[arg(
            long,
            value_name = "URL",
            default_value = "http://127.0.0.1:3002",
            help = "Base URL of the catalog service"
        )]
        url: Url,
    },
}

impl Command {
    pub async fn run(&self) -> anyhow::Result<()> {
        match self {
            Command::Render { url } => {
                let page = CatalogPage::new(HttpCatalogSource::new(url.clone()));
                let mut container = Container::new();
                page.load(&mut container).await;
                log::debug!("Rendered {} element(s)", container.children().len());
                println!("{}", container.inner_html());
                Ok(())
            }
        }
    }
}
