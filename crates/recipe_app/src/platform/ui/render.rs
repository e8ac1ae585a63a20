use recipe_core::{AppViewModel, CatalogEntry, DetailRegion, Meal};

use super::constants::*;

/// Lines for one full redraw. With `focus_detail` the detail region leads,
/// which is how a terminal "scrolls" to a freshly resolved recipe.
pub fn render(view: &AppViewModel, focus_detail: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if focus_detail {
        render_detail(&view.detail, &mut lines);
        render_recommendations(&view.recommendations, &mut lines);
        render_catalog(&view.catalog, &mut lines);
    } else {
        lines.push(format!("== {TITLE} =="));
        render_catalog(&view.catalog, &mut lines);
        render_detail(&view.detail, &mut lines);
        render_recommendations(&view.recommendations, &mut lines);
    }
    lines
}

fn render_catalog(catalog: &[CatalogEntry], lines: &mut Vec<String>) {
    lines.push(format!("-- {HEADING_CATALOG} ({}) --", catalog.len()));
    lines.extend(catalog.iter().map(entry_line));
}

fn render_recommendations(meals: &[Meal], lines: &mut Vec<String>) {
    if meals.is_empty() {
        return;
    }
    lines.push(format!("-- {HEADING_RECOMMENDED} --"));
    lines.extend(meals.iter().map(|meal| entry_line(&meal.catalog_entry())));
}

fn render_detail(detail: &DetailRegion, lines: &mut Vec<String>) {
    match detail {
        DetailRegion::Idle => {}
        DetailRegion::Loading => lines.push(LOADING_TEXT.to_string()),
        DetailRegion::Failed(err) => lines.push(err.to_string()),
        DetailRegion::Resolved(meal) => {
            lines.push(format!("## {}", meal.name));
            if !meal.thumbnail_url.is_empty() {
                lines.push(meal.thumbnail_url.clone());
            }
            lines.push(HEADING_INGREDIENTS.to_string());
            lines.extend(meal.ingredients.iter().map(|i| format!("  - {i}")));
            lines.push(HEADING_INSTRUCTIONS.to_string());
            lines.extend(meal.instructions.lines().map(str::to_string));
        }
    }
}

fn entry_line(entry: &CatalogEntry) -> String {
    format!("  [{}] {}", entry.id, entry.name)
}
