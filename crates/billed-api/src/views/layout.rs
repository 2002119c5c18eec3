//! Vertical navigation bar shared by the employee pages

use billed_core::RoutePath;

const WINDOW_ICON: &str = r#"<svg xmlns='http://www.w3.org/2000/svg' class='h-6 w-6' fill='none' viewBox='0 0 24 24' stroke='currentColor'><path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M4 5h16v14H4zM4 9h16'/></svg>"#;
const MAIL_ICON: &str = r#"<svg xmlns='http://www.w3.org/2000/svg' class='h-6 w-6' fill='none' viewBox='0 0 24 24' stroke='currentColor'><path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M3 8l9 6 9-6M5 5h14a2 2 0 012 2v10a2 2 0 01-2 2H5a2 2 0 01-2-2V7a2 2 0 012-2z'/></svg>"#;

/// Vertical layout with the bills (window) and new-bill (mail) icons
///
/// The icon of `current` carries the `active-icon` class.
pub fn vertical_layout(current: RoutePath) -> String {
    let icon_class = |route: RoutePath| {
        if route == current { "active-icon" } else { "" }
    };

    format!(
        r#"<div class='vertical-navbar w-20 flex-shrink-0 bg-indigo-700 h-screen flex flex-col items-center py-6 gap-6'>
    <div class='layout-title text-white font-bold'>Billed</div>
    <a href='{}' id='layout-icon1' data-testid='icon-window' class='text-white {}'>{}</a>
    <a href='{}' id='layout-icon2' data-testid='icon-mail' class='text-white {}'>{}</a>
    <a href='/logout' id='layout-disconnect' class='text-white text-xs mt-auto'>Déconnexion</a>
</div>"#,
        RoutePath::Bills.path(),
        icon_class(RoutePath::Bills),
        WINDOW_ICON,
        RoutePath::NewBill.path(),
        icon_class(RoutePath::NewBill),
        MAIL_ICON
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_icon_follows_route() {
        let html = vertical_layout(RoutePath::Bills);
        assert!(html.contains("data-testid='icon-window' class='text-white active-icon'"));
        assert!(html.contains("data-testid='icon-mail' class='text-white '"));

        let html = vertical_layout(RoutePath::NewBill);
        assert!(html.contains("data-testid='icon-mail' class='text-white active-icon'"));
    }
}
