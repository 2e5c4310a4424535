//! Sign-in commands

use crate::error::PocketResult;
use crate::services::MockAuthenticator;
use crate::stores::AuthStore;

/// Check credentials and remember the user
pub fn handle_login(auth: &mut AuthStore, email: &str, password: &str) -> PocketResult<()> {
    let user = MockAuthenticator::new().login(email, password)?;
    let shown = user.to_string();
    auth.sign_in(user)?;
    println!("Signed in as {}", shown);
    Ok(())
}

/// Forget the signed-in user
pub fn handle_logout(auth: &mut AuthStore) -> PocketResult<()> {
    if !auth.is_signed_in() {
        println!("Not signed in.");
        return Ok(());
    }
    auth.sign_out()?;
    println!("Signed out.");
    Ok(())
}

/// Print the signed-in user
pub fn handle_whoami(auth: &AuthStore) {
    match auth.user() {
        Some(user) => {
            println!("{}", user);
            println!("  ID: {}", user.id);
        }
        None => println!("Not signed in."),
    }
}
