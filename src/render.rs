//! Search result rendering.
//!
//! Builds the results-grid markup from pet records and writes it into the
//! page. Field values pass through askama's HTML escaping, so markup in a
//! pet name or breed arrives inert.

use askama::Template;
use tracing::{debug, warn};

use crate::model::Pet;
use crate::page::Page;

/// Class of the container the results are rendered into.
pub const RESULTS_GRID_CLASS: &str = "pets-grid";

#[derive(Template)]
#[template(path = "pet_results.html")]
struct ResultsTemplate<'a> {
    pets: &'a [Pet],
}

/// Render the results grid for `pets` as a markup string.
pub(crate) fn results_markup(pets: &[Pet]) -> askama::Result<String> {
    ResultsTemplate { pets }.render()
}

/// Replace the results container's contents with cards for `pets`, or the
/// no-results message when empty. No-op when the page has no results grid.
pub fn render_results(page: &mut Page, pets: &[Pet]) {
    let Some(grid) = page.elements_by_class(RESULTS_GRID_CLASS).into_iter().next() else {
        debug!(class = RESULTS_GRID_CLASS, "no results container on page");
        return;
    };
    match results_markup(pets) {
        Ok(markup) => {
            debug!(pet_count = pets.len(), "results rendered");
            page.set_markup(grid, markup);
        }
        Err(err) => warn!(error = %err, "failed to render results"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn pet(id: i64, name: &str, breed: &str, image: Option<&str>) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            breed: breed.to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_list_renders_no_results_message() {
        assert_eq!(results_markup(&[]).unwrap(), "<p>No pets found</p>");
    }

    #[test]
    fn test_card_contains_image_heading_breed_and_link() {
        let markup =
            results_markup(&[pet(7, "Rex", "Lab", Some("http://x/r.jpg"))]).unwrap();
        assert!(markup.contains(r#"<img src="http://x/r.jpg" class="pet-image">"#));
        assert!(markup.contains("<h3>Rex</h3>"));
        assert!(markup.contains("<p>Lab</p>"));
        assert!(markup.contains(r#"<a href="/pets/7/" class="btn">View</a>"#));
    }

    #[test]
    fn test_missing_image_renders_placeholder() {
        let markup = results_markup(&[pet(1, "Mo", "Pug", None)]).unwrap();
        assert!(markup.contains(r#"<div class="pet-image">No image</div>"#));
        assert!(!markup.contains("<img"));
    }

    #[test]
    fn test_empty_image_renders_placeholder() {
        let markup = results_markup(&[pet(1, "Mo", "Pug", Some(""))]).unwrap();
        assert!(markup.contains(r#"<div class="pet-image">No image</div>"#));
    }

    #[test]
    fn test_field_values_are_escaped() {
        let markup =
            results_markup(&[pet(1, "<script>alert(1)</script>", "Rex & Co", None)]).unwrap();
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("Rex &amp; Co"));
    }

    #[test]
    fn test_render_without_grid_is_noop() {
        let mut page = Page::new();
        page.append_to_root(Element::new("div").class("content"));
        render_results(&mut page, &[pet(1, "Mo", "Pug", None)]);
        assert!(page.elements_by_class(RESULTS_GRID_CLASS).is_empty());
    }

    #[test]
    fn test_render_writes_into_grid() {
        let mut page = Page::new();
        let grid = page.append_to_root(Element::new("div").class("pets-grid"));
        render_results(&mut page, &[]);
        assert_eq!(page.markup(grid), Some("<p>No pets found</p>"));
    }
}
