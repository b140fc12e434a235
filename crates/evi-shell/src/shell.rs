//! Shell tying a session to its desktop

use std::collections::BTreeMap;

use tracing::debug;

use evi_desktop::{DesktopConfig, DesktopEngine, WindowId};

use crate::content::{ContentRegistry, ContentView};
use crate::error::{ShellError, ShellResult};
use crate::session::{Authenticator, Session};
use crate::sidebar::{self, NavItem};

/// Category opened right after login, when registered
pub const HOME_CATEGORY: &str = "home";

struct ActiveDesktop {
    session: Session,
    desktop: DesktopEngine,
    mounted: BTreeMap<WindowId, Box<dyn ContentView>>,
}

impl ActiveDesktop {
    /// Unmount views whose window is gone
    fn reconcile(&mut self) {
        let desktop = &self.desktop;
        let stale: Vec<WindowId> = self
            .mounted
            .keys()
            .copied()
            .filter(|id| desktop.windows.get(*id).is_none())
            .collect();
        for id in stale {
            if let Some(mut view) = self.mounted.remove(&id) {
                view.unmount();
            }
        }
    }
}

/// The application shell
///
/// Logged out there is no desktop at all. Logging in builds a fresh
/// [`DesktopEngine`]; logging out tears it down and unmounts every view.
pub struct Shell<A: Authenticator> {
    auth: A,
    registry: ContentRegistry,
    config: DesktopConfig,
    active: Option<ActiveDesktop>,
}

impl<A: Authenticator> Shell<A> {
    pub fn new(auth: A, registry: ContentRegistry) -> Self {
        Self::with_config(auth, registry, DesktopConfig::default())
    }

    pub fn with_config(auth: A, registry: ContentRegistry, config: DesktopConfig) -> Self {
        Self {
            auth,
            registry,
            config,
            active: None,
        }
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Log in and build the desktop
    ///
    /// A repeated login replaces the current session and its desktop.
    pub fn login(&mut self, username: &str, password: &str) -> ShellResult<()> {
        let token = self.auth.authenticate(username, password)?;
        self.logout();

        debug!(user = %username, "session started");
        self.active = Some(ActiveDesktop {
            session: Session::new(username, token),
            desktop: DesktopEngine::with_config(self.config.clone()),
            mounted: BTreeMap::new(),
        });

        if self.registry.entry(HOME_CATEGORY).is_ok() {
            self.navigate(HOME_CATEGORY)?;
        }
        Ok(())
    }

    /// End the session, dropping the desktop; no-op when logged out
    pub fn logout(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.desktop.teardown();
            for (_, mut view) in std::mem::take(&mut active.mounted) {
                view.unmount();
            }
            debug!(user = %active.session.user(), "session ended");
        }
    }

    pub fn desktop(&self) -> ShellResult<&DesktopEngine> {
        self.active
            .as_ref()
            .map(|a| &a.desktop)
            .ok_or(ShellError::NotAuthenticated)
    }

    pub fn desktop_mut(&mut self) -> ShellResult<&mut DesktopEngine> {
        self.active
            .as_mut()
            .map(|a| &mut a.desktop)
            .ok_or(ShellError::NotAuthenticated)
    }

    /// Open (or focus) the window for a module and mount its view
    pub fn navigate(&mut self, category: &str) -> ShellResult<WindowId> {
        let active = self.active.as_mut().ok_or(ShellError::NotAuthenticated)?;
        let entry = self.registry.entry(category)?;

        active.reconcile();
        let id = active.desktop.open_window(category, &entry.title);
        if !active.mounted.contains_key(&id) {
            let view = self.registry.instantiate(category)?;
            active.mounted.insert(id, view);
        }
        Ok(id)
    }

    /// Close a window and unmount its view; no-op for unknown ids
    pub fn close(&mut self, id: WindowId) -> ShellResult<()> {
        let active = self.active.as_mut().ok_or(ShellError::NotAuthenticated)?;
        active.desktop.close_window(id);
        active.reconcile();
        Ok(())
    }

    /// Snap a window to a layout given by name
    pub fn snap(&mut self, id: WindowId, layout: &str) -> ShellResult<()> {
        self.desktop_mut()?.apply_snap_by_name(id, layout)?;
        Ok(())
    }

    /// View mounted in a window
    pub fn content(&self, id: WindowId) -> Option<&dyn ContentView> {
        self.active
            .as_ref()
            .and_then(|a| a.mounted.get(&id))
            .map(|view| view.as_ref())
    }

    /// Number of mounted views
    pub fn mounted_count(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.mounted.len())
    }

    /// Sidebar entries with their open highlight
    pub fn navigation(&self) -> ShellResult<Vec<NavItem>> {
        let desktop = self.desktop()?;
        Ok(sidebar::navigation(&self.registry, &desktop.windows))
    }
}

impl<A: Authenticator> Drop for Shell<A> {
    fn drop(&mut self) {
        self.logout();
    }
}
