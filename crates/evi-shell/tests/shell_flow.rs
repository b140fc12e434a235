//! Shell Flow Integration Tests
//!
//! Login, navigation and logout driven through the public shell API.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use evi_shell::{
    Authenticator, ContentRegistry, ContentView, NavItem, SessionToken, Shell, ShellError,
    ShellResult,
};

/// Accepts exactly one username/password pair
struct FixedCredentials;

impl Authenticator for FixedCredentials {
    fn authenticate(&self, username: &str, password: &str) -> ShellResult<SessionToken> {
        if username == "admin" && password == "secret" {
            Ok(SessionToken::new("t-1"))
        } else {
            Err(ShellError::InvalidCredentials)
        }
    }
}

/// View that records its unmount in a shared log
#[derive(Debug)]
struct Recorded {
    category: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl ContentView for Recorded {
    fn category(&self) -> &str {
        self.category
    }

    fn unmount(&mut self) {
        self.log.borrow_mut().push(self.category);
    }
}

const MODULES: [(&str, &str); 4] = [
    ("home", "Home"),
    ("sales", "Sales"),
    ("inventory", "Inventory"),
    ("profile", "Profile"),
];

fn registry(log: &Rc<RefCell<Vec<&'static str>>>) -> ContentRegistry {
    let mut registry = ContentRegistry::new();
    for (category, title) in MODULES {
        let log = Rc::clone(log);
        registry.register(category, title, move || {
            Box::new(Recorded {
                category,
                log: Rc::clone(&log),
            })
        });
    }
    registry
}

fn shell() -> (Shell<FixedCredentials>, Rc<RefCell<Vec<&'static str>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    (Shell::new(FixedCredentials, registry(&log)), log)
}

fn active(items: &[NavItem]) -> Vec<&str> {
    items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.category.as_str())
        .collect()
}

#[test]
fn test_rejected_login_keeps_desktop_closed() {
    let (mut shell, _) = shell();

    assert_eq!(
        shell.login("admin", "wrong"),
        Err(ShellError::InvalidCredentials)
    );
    assert!(!shell.is_authenticated());
    assert_eq!(shell.navigation().err(), Some(ShellError::NotAuthenticated));
}

#[test]
fn test_sidebar_follows_windows() {
    let (mut shell, _) = shell();
    shell.login("admin", "secret").unwrap();

    assert_eq!(active(&shell.navigation().unwrap()), vec!["home"]);

    let sales = shell.navigate("sales").unwrap();
    shell.navigate("inventory").unwrap();
    assert_eq!(
        active(&shell.navigation().unwrap()),
        vec!["home", "sales", "inventory"]
    );

    shell.close(sales).unwrap();
    assert_eq!(
        active(&shell.navigation().unwrap()),
        vec!["home", "inventory"]
    );

    let titles: Vec<String> = shell
        .navigation()
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, vec!["Home", "Sales", "Inventory", "Profile"]);
}

#[test]
fn test_close_unmounts_view() {
    let (mut shell, log) = shell();
    shell.login("admin", "secret").unwrap();

    let sales = shell.navigate("sales").unwrap();
    shell.close(sales).unwrap();
    shell.close(sales).unwrap();

    assert_eq!(*log.borrow(), vec!["sales"]);
    assert!(shell.content(sales).is_none());
}

#[test]
fn test_window_closed_on_desktop_is_unmounted_on_next_navigate() {
    let (mut shell, log) = shell();
    shell.login("admin", "secret").unwrap();

    let sales = shell.navigate("sales").unwrap();
    shell.desktop_mut().unwrap().close_window(sales);
    shell.navigate("profile").unwrap();

    assert_eq!(*log.borrow(), vec!["sales"]);
    assert_eq!(shell.mounted_count(), 2);
}

#[test]
fn test_logout_drops_layout() {
    let (mut shell, log) = shell();
    shell.login("admin", "secret").unwrap();

    let sales = shell.navigate("sales").unwrap();
    shell.snap(sales, "right").unwrap();
    shell.logout();

    assert!(!shell.is_authenticated());
    assert_eq!(log.borrow().len(), 2);

    // A new session starts from a fresh desktop
    shell.login("admin", "secret").unwrap();
    let desktop = shell.desktop().unwrap();
    assert_eq!(desktop.windows.count(), 1);
    assert!(!desktop.is_open("sales"));
}

#[test]
fn test_nav_item_json() {
    let (mut shell, _) = shell();
    shell.login("admin", "secret").unwrap();

    let json = serde_json::to_value(&shell.navigation().unwrap()[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "category": "home", "title": "Home", "active": true })
    );
}

proptest! {
    /// The highlight equals the set of open categories after any sequence
    /// of navigations and closes.
    #[test]
    fn sidebar_matches_desktop(ops in prop::collection::vec((0usize..4, any::<bool>()), 0..40)) {
        let (mut shell, _) = shell();
        shell.login("admin", "secret").unwrap();

        for (module, close) in ops {
            let id = shell.navigate(MODULES[module].0).unwrap();
            if close {
                shell.close(id).unwrap();
            }
        }

        let desktop = shell.desktop().unwrap();
        for item in shell.navigation().unwrap() {
            prop_assert_eq!(item.active, desktop.is_open(&item.category));
        }
        prop_assert_eq!(shell.mounted_count(), desktop.windows.count());
    }
}
