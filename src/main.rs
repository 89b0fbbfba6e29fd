use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use petpage::render::RESULTS_GRID_CLASS;
use petpage::search::SEARCH_INPUT_ID;
use petpage::{alerts, menu, AlwaysConfirm, App, Element, Page, SearchClient, UiConfig};

/// Headless demo of the adoption page: stdin lines become search input
/// events against a live endpoint, and the grid markup is printed back.
#[derive(Parser)]
#[command(name = "petpage", about = "Drive the adoption page against a search endpoint", long_about = None)]
struct Cli {
    /// Base URL of the site serving /pets/search/ (overrides PETPAGE_SEARCH_BASE)
    #[arg(long)]
    base_url: Option<String>,
}

/// The sample page mirrors the markup contract the real templates provide.
fn demo_page() -> Page {
    let mut page = Page::new();
    page.append_to_root(Element::new("button").id(menu::TOGGLE_ID));
    page.append_to_root(Element::new("nav").id(menu::PANEL_ID).class("nav-menu"));
    let alert = page.append_to_root(Element::new("div").class("alert"));
    page.append(alert, Element::new("button").class(alerts::CLOSE_CLASS));
    page.append_to_root(Element::new("input").id(SEARCH_INPUT_ID));
    page.append_to_root(Element::new("div").class(RESULTS_GRID_CLASS));
    page.append_to_root(Element::new("a").href("/pets/1/delete/"));
    page
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let base = cli
        .base_url
        .unwrap_or_else(|| UiConfig::from_env().search_base);

    let mut page = demo_page();
    let mut app = App::boot(&page, SearchClient::new(base), Box::new(AlwaysConfirm));
    let input = page
        .element_by_id(SEARCH_INPUT_ID)
        .context("demo page is missing its search input")?;
    let grid = page
        .elements_by_class(RESULTS_GRID_CLASS)
        .into_iter()
        .next()
        .context("demo page is missing its results grid")?;

    println!("type a query (3+ characters) and press enter; ctrl-d exits");
    for line in io::stdin().lock().lines() {
        let line = line?;
        let before = app.search_requests_issued();
        app.input(input, &line);
        if app.search_requests_issued() == before {
            println!("(query too short, nothing issued)");
            continue;
        }
        app.pump_blocking(&mut page);
        println!("{}", page.markup(grid).unwrap_or("(grid unchanged)"));
    }

    Ok(())
}
