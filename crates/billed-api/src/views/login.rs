//! Login page

use billed_utils::escape_html;

/// Employee login form, with an optional error line
pub fn login_ui(error: Option<&str>) -> String {
    let error_line = error
        .map(|e| format!(r#"<p class='text-sm text-red-600 mb-4' data-testid='login-error'>{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<div class='min-h-screen flex items-center justify-center bg-gray-50'>
    <div class='bg-white rounded-xl shadow-sm p-8 w-full max-w-md'>
        <h2 class='text-2xl font-bold mb-6 text-center'>Billed</h2>
        <h3 class='text-lg font-semibold mb-4'>Employé</h3>
        {}
        <form data-testid='form-employee' method='post' action='/login' class='space-y-4'>
            <div>
                <label class='block text-sm font-medium text-gray-700 mb-1'>Votre email</label>
                <input required type='email' name='email' data-testid='employee-email-input' placeholder='johndoe@email.com' class='w-full border rounded-lg p-2' />
            </div>
            <div>
                <label class='block text-sm font-medium text-gray-700 mb-1'>Mot de passe</label>
                <input required type='password' name='password' data-testid='employee-password-input' placeholder='******' class='w-full border rounded-lg p-2' />
            </div>
            <button type='submit' data-testid='employee-login-button' class='w-full px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Se connecter</button>
        </form>
    </div>
</div>"#,
        error_line
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_ui() {
        let html = login_ui(None);
        assert!(html.contains("data-testid='form-employee'"));
        assert!(!html.contains("login-error"));

        let html = login_ui(Some("Email invalide"));
        assert!(html.contains("data-testid='login-error'>Email invalide"));
    }
}
