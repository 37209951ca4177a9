use pretty_assertions::assert_eq;
use server::directory::{authenticate, find_account};
use shared_types::{LayoutShell, Role, DEMO_ACCOUNTS};

#[test]
fn every_demo_account_signs_in_with_its_own_password() {
    for account in DEMO_ACCOUNTS {
        let found = authenticate(account.email, account.password);
        assert_eq!(found.map(|a| a.email), Some(account.email));
    }
}

#[test]
fn demo_accounts_land_in_their_role_shell() {
    let shell = |email: &str| {
        let account = find_account(email).expect("demo account exists");
        LayoutShell::for_role(account.role)
    };
    assert_eq!(shell("admin@insurance.com"), LayoutShell::Admin);
    assert_eq!(shell("agent@insurance.com"), LayoutShell::Agent);
    assert_eq!(shell("customer@insurance.com"), LayoutShell::Customer);
    assert_eq!(shell("demo@test.com"), LayoutShell::Customer);
}

#[test]
fn session_user_carries_role_and_email() {
    let user = find_account("agent@insurance.com")
        .expect("agent account")
        .to_session_user();
    assert_eq!(user.role, Role::Agent);
    assert_eq!(user.email, "agent@insurance.com");
}
