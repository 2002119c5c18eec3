//! Error and loading pages

use billed_core::RoutePath;
use billed_utils::escape_html;

use super::layout::vertical_layout;

/// Error page showing the message verbatim
pub fn error_page(error: &str) -> String {
    format!(
        r#"<div class='layout flex'>
    {}
    <div class='content flex-1 p-6' data-testid='error-message'>
        <div class='content-header mb-4'><div class='content-title text-2xl font-bold'>Erreur</div></div>
        <div class='bg-red-50 border border-red-200 rounded-lg p-4 text-red-700'>{}</div>
    </div>
</div>"#,
        vertical_layout(RoutePath::Bills),
        escape_html(error)
    )
}

pub fn loading_page() -> String {
    format!(
        r#"<div class='layout flex'>
    {}
    <div class='content flex-1 p-6' id='loading'><p class='text-gray-500 text-center py-12'>Loading...</p></div>
</div>"#,
        vertical_layout(RoutePath::Bills)
    )
}
