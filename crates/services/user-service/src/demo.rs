//! Demo walkthrough driven through the service layer.

use serde::Serialize;

use common::{AppError, AppResult};
use domain::{User, UserId, UserRole};

use crate::service::UserService;

/// What the walkthrough observed, step by step.
#[derive(Debug, Clone, Serialize)]
pub struct DemoSummary {
    /// Name of user 1 before anything changes, if present
    pub found: Option<String>,
    /// Active users after Diana joins
    pub active_after_add: usize,
    /// Admins after Diana joins
    pub admins: usize,
    /// Active ids after Bob is deactivated
    pub active_after_deactivate: Vec<UserId>,
    /// Users left after Alice is removed
    pub count: usize,
    /// Final store contents in insertion order
    pub users: Vec<User>,
}

/// Run the walkthrough against an already seeded service.
pub async fn run<S>(service: &S) -> AppResult<DemoSummary>
where
    S: UserService + ?Sized,
{
    let found = match service.get_user(1).await {
        Ok(user) => Some(user.name().to_string()),
        Err(AppError::NotFound) => None,
        Err(e) => return Err(e),
    };

    service
        .add_user(User::new(4, "Diana", "diana@example.com", UserRole::User))
        .await?;

    let active_after_add = service.list_active_users().await?.len();
    let admins = service.list_users_by_role(UserRole::Admin).await?.len();

    ignore_missing(service.set_user_active(2, false).await)?;
    let active_after_deactivate = service
        .list_active_users()
        .await?
        .iter()
        .map(User::id)
        .collect();

    ignore_missing(service.remove_user(1).await.map(|_| ()))?;

    service.verify().await?;

    Ok(DemoSummary {
        found,
        active_after_add,
        admins,
        active_after_deactivate,
        count: service.count_users().await,
        users: service.list_users().await?,
    })
}

/// List users, optionally narrowed to a role name and an active flag.
///
/// The role name is parsed here, so an unknown role surfaces as
/// `AppError::Validation`.
pub async fn list<S>(service: &S, role: Option<&str>, active: Option<bool>) -> AppResult<Vec<User>>
where
    S: UserService + ?Sized,
{
    let role = role.map(|name| name.parse::<UserRole>()).transpose()?;

    let users = match (role, active) {
        (Some(role), _) => service.list_users_by_role(role).await?,
        (None, Some(true)) => service.list_active_users().await?,
        (None, Some(false)) => service.list_inactive_users().await?,
        (None, None) => service.list_users().await?,
    };

    Ok(match (role, active) {
        (Some(_), Some(flag)) => users.into_iter().filter(|u| u.is_active() == flag).collect(),
        _ => users,
    })
}

/// Print users one per line, or as a JSON array
pub fn print_users(users: &[User], json: bool) -> AppResult<()> {
    if json {
        println!("{}", to_json(users)?);
    } else {
        for user in users {
            println!("{}", user);
        }
    }
    Ok(())
}

/// Print a summary in human-readable form
pub fn print_summary(summary: &DemoSummary) {
    match &summary.found {
        Some(name) => println!("Found user: {}", name),
        None => println!("User 1 not found"),
    }
    println!("Active users: {}", summary.active_after_add);
    println!("Admins: {}", summary.admins);
    println!("Active after deactivation: {:?}", summary.active_after_deactivate);
    println!("Total users: {}", summary.count);
    for user in &summary.users {
        println!("  {}", user);
    }
}

/// Print the role catalogue
pub fn print_roles(json: bool) -> AppResult<()> {
    if json {
        let roles: Vec<_> = UserRole::ALL
            .iter()
            .map(|role| serde_json::json!({ "role": role, "description": role.description() }))
            .collect();
        println!("{}", to_json(&roles)?);
    } else {
        for role in UserRole::ALL {
            println!("{:<6} {}", role, role.description());
        }
    }
    Ok(())
}

/// Render any serializable value as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("JSON serialization failed: {}", e)))
}

fn ignore_missing(result: AppResult<()>) -> AppResult<()> {
    match result {
        Err(AppError::NotFound) => Ok(()),
        other => other,
    }
}
