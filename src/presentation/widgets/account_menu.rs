use crate::domain::user::UserData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Hit-testing for the menu's region, supplied by whatever owns the pointer
/// events.
pub trait PointerRegion<T: ?Sized> {
    fn contains(&self, target: &T) -> bool;
}

impl<T: ?Sized, F> PointerRegion<T> for F
where
    F: Fn(&T) -> bool,
{
    fn contains(&self, target: &T) -> bool {
        self(target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub id: &'static str,
    pub label: String,
    pub href: String,
}

impl MenuLink {
    fn new(id: &'static str, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Account menu in the page header: a two-state machine plus the links it
/// shows for the current session.
#[derive(Debug, Clone)]
pub struct AccountMenu {
    user: UserData,
    state: MenuState,
}

impl AccountMenu {
    pub fn new(user: UserData) -> Self {
        Self {
            user,
            state: MenuState::Closed,
        }
    }

    pub const fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub const fn user(&self) -> &UserData {
        &self.user
    }

    /// The toggle button. The click that triggers it must not also reach
    /// [`Self::handle_click`].
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Any page click. Clicks outside `region` close the menu; clicks inside
    /// leave it as it is.
    pub fn handle_click<T, R>(&mut self, region: &R, target: &T) -> MenuState
    where
        T: ?Sized,
        R: PointerRegion<T> + ?Sized,
    {
        if self.is_open() && !region.contains(target) {
            self.state = MenuState::Closed;
        }
        self.state
    }

    /// Links the menu shows right now. `current_url` is where sign-in and
    /// sign-out return to.
    pub fn links(&self, current_url: &str) -> Vec<MenuLink> {
        let return_to = encode_return_to(current_url);

        if self.user.is_anonymous() {
            return vec![
                MenuLink::new("create-account", "Create account", "/system:join"),
                MenuLink::new("sign-in", "Sign in", format!("/-/login?{return_to}")),
            ];
        }

        let mut links = vec![MenuLink::new("profile", self.user.username.clone(), "/-/profile")];
        if self.user.can_administer() {
            links.push(MenuLink::new("admin", "Admin panel", "/-/admin"));
        }
        let own_profile = match self.user.id {
            Some(id) => format!("/-/users/{id}-{}", self.user.username),
            None => format!("/-/users/{}", self.user.username),
        };
        links.push(MenuLink::new("my-account", "My profile", own_profile));

        if self.is_open() {
            links.push(MenuLink::new("settings", "Settings", "/-/profile/edit"));
            links.push(MenuLink::new(
                "sign-out",
                "Sign out",
                format!("/-/logout?{return_to}"),
            ));
        }
        links
    }
}

fn encode_return_to(url: &str) -> String {
    serde_urlencoded::to_string([("to", url)]).unwrap_or_default()
}
