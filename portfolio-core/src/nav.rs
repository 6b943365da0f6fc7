#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    fn flipped(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        matches!(self, DropdownState::Open)
    }

    fn flipped(self) -> Self {
        match self {
            DropdownState::Open => DropdownState::Closed,
            DropdownState::Closed => DropdownState::Open,
        }
    }
}

/// Vertical extent of a `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Navigation chrome state: the two toggles plus the highlighted section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub menu: MenuState,
    pub dropdown: DropdownState,
    pub active_section: Option<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.flipped();
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown = self.dropdown.flipped();
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = DropdownState::Closed;
    }

    /// Dropdown item picked: collapse everything before scrolling away.
    pub fn select_dropdown_item(&mut self) {
        self.menu = MenuState::Closed;
        self.dropdown = DropdownState::Closed;
    }

    pub fn follow_nav_link(&mut self) {
        self.menu = MenuState::Closed;
        self.dropdown = DropdownState::Closed;
    }

    /// Re-run the scroll spy. Returns true when the highlight moved.
    /// No matching section leaves the previous highlight in place.
    pub fn update_active_section(
        &mut self,
        sections: &[SectionBounds],
        scroll_y: f64,
        spy_offset: f64,
    ) -> bool {
        match active_section(sections, scroll_y, spy_offset) {
            Some(id) if self.active_section.as_deref() != Some(id) => {
                self.active_section = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

/// Section containing `scroll_y + spy_offset`. Later sections win on overlap.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    spy_offset: f64,
) -> Option<&str> {
    let spy_point = scroll_y + spy_offset;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(spy_point))
        .map(|section| section.id.as_str())
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Document-space scroll target for an anchor, below the fixed header.
pub fn scroll_target(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}

/// `#about` -> `about`. Anything that is not an in-page anchor yields None.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
