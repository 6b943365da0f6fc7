pub const ALL_FILTER: &str = "all";

/// Lowercased tags parsed from a pipe-delimited `data-tags` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.to_lowercase()
                .split('|')
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown)
    }

    /// Inline `display` value.
    pub fn display(&self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }

    /// Inline `opacity` value, always written together with `display`.
    pub fn opacity(&self) -> &'static str {
        match self {
            Visibility::Shown => "1",
            Visibility::Hidden => "0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSide {
    Left,
    Right,
}

impl LayoutSide {
    pub fn for_position(index: usize) -> Self {
        if index % 2 == 0 {
            LayoutSide::Left
        } else {
            LayoutSide::Right
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            LayoutSide::Left => "layout-left",
            LayoutSide::Right => "layout-right",
        }
    }
}

pub const LAYOUT_CLASSES: [&str; 2] = ["layout-left", "layout-right"];

/// Active tag. Exactly "all" disables filtering; only the tag lookup is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection(String);

impl FilterSelection {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn all() -> Self {
        Self(ALL_FILTER.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_FILTER
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, tags: &TagSet) -> bool {
        self.is_all() || tags.contains(&self.0.to_lowercase())
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub value: String,
    pub disabled: bool,
}

impl FilterControl {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub tags: TagSet,
    pub visibility: Visibility,
}

impl ProjectEntry {
    pub fn new(raw_tags: &str) -> Self {
        Self {
            tags: TagSet::parse(raw_tags),
            visibility: Visibility::Shown,
        }
    }
}

/// Filter bar plus project list. Exactly one control is active at a time,
/// except when the markup has no controls at all.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    controls: Vec<FilterControl>,
    entries: Vec<ProjectEntry>,
    active_control: Option<usize>,
    selection: FilterSelection,
}

impl ProjectFilter {
    pub fn new(controls: Vec<FilterControl>, entries: Vec<ProjectEntry>) -> Self {
        let active_control = controls.iter().position(|c| c.value == ALL_FILTER);
        Self {
            controls,
            entries,
            active_control,
            selection: FilterSelection::all(),
        }
    }

    /// Restore the bar's initially active control as reported by the markup.
    pub fn with_active_control(mut self, index: Option<usize>) -> Self {
        if let Some(index) = index.filter(|i| *i < self.controls.len()) {
            self.active_control = Some(index);
            self.selection = FilterSelection::new(&self.controls[index].value);
        }
        self
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn active_control(&self) -> Option<usize> {
        self.active_control
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Controls can be disabled after load; the markup is re-read per click.
    pub fn set_control_disabled(&mut self, index: usize, disabled: bool) {
        if let Some(control) = self.controls.get_mut(index) {
            control.disabled = disabled;
        }
    }

    /// Click on control `index`. Disabled or unknown controls are ignored and
    /// return None; otherwise the new selection is applied and returned.
    pub fn apply_filter(&mut self, index: usize) -> Option<&FilterSelection> {
        let control = self.controls.get(index)?;
        if control.disabled {
            tracing::debug!("Ignoring click on disabled filter '{}'", control.value);
            return None;
        }

        self.selection = FilterSelection::new(&control.value);
        self.active_control = Some(index);
        self.apply_selection();
        Some(&self.selection)
    }

    /// Reset to "all" and show every entry.
    pub fn clear_filters(&mut self) {
        self.selection = FilterSelection::all();
        self.active_control = self.controls.iter().position(|c| c.value == ALL_FILTER);
        self.apply_selection();
    }

    fn apply_selection(&mut self) {
        for entry in &mut self.entries {
            entry.visibility = if self.selection.matches(&entry.tags) {
                Visibility::Shown
            } else {
                Visibility::Hidden
            };
        }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.visibility.is_shown())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn layout(&self) -> Vec<Option<LayoutSide>> {
        let shown: Vec<bool> = self
            .entries
            .iter()
            .map(|entry| entry.visibility.is_shown())
            .collect();
        alternating_layout(&shown)
    }
}

/// Assign sides by position within the visible ordering only. Hidden
/// entries get no side.
pub fn alternating_layout(visible: &[bool]) -> Vec<Option<LayoutSide>> {
    let mut position = 0;
    visible
        .iter()
        .map(|shown| {
            if *shown {
                let side = LayoutSide::for_position(position);
                position += 1;
                Some(side)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectFilter {
        ProjectFilter::new(
            vec![
                FilterControl::new("all"),
                FilterControl::new("mobile"),
                FilterControl::new("Data"),
                FilterControl::disabled("games"),
            ],
            vec![
                ProjectEntry::new("web|mobile"),
                ProjectEntry::new("mobile"),
                ProjectEntry::new("data"),
            ],
        )
    }

    fn shown(filter: &ProjectFilter) -> Vec<bool> {
        filter
            .entries()
            .iter()
            .map(|e| e.visibility.is_shown())
            .collect()
    }

    #[test]
    fn tags_are_lowercased_and_split() {
        let tags = TagSet::parse("Web|MOBILE|data science");
        assert_eq!(
            tags.iter().collect::<Vec<_>>(),
            vec!["web", "mobile", "data science"]
        );
        assert!(tags.contains("mobile"));
        assert!(!tags.contains("Mobile"));
    }

    #[test]
    fn mobile_filter_scenario() {
        let mut filter = sample();
        assert_eq!(filter.apply_filter(1).map(|s| s.as_str()), Some("mobile"));
        assert_eq!(filter.visible_indices(), vec![0, 1]);
        assert_eq!(
            filter.layout(),
            vec![Some(LayoutSide::Left), Some(LayoutSide::Right), None]
        );
        assert_eq!(filter.active_control(), Some(1));
    }

    #[test]
    fn filter_value_is_case_insensitive() {
        let mut filter = sample();
        filter.apply_filter(2);
        assert_eq!(filter.visible_indices(), vec![2]);
        assert_eq!(filter.layout(), vec![None, None, Some(LayoutSide::Left)]);
    }

    #[test]
    fn only_lowercase_all_disables_filtering() {
        let mut filter = ProjectFilter::new(
            vec![FilterControl::new("all"), FilterControl::new("ALL")],
            vec![ProjectEntry::new("web"), ProjectEntry::new("all")],
        );
        let selection = filter.apply_filter(1).unwrap();
        assert!(!selection.is_all());
        assert_eq!(filter.visible_indices(), vec![1]);

        filter.apply_filter(0);
        assert_eq!(filter.visible_indices(), vec![0, 1]);
    }

    #[test]
    fn visible_set_matches_selection_for_every_control() {
        let mut filter = sample();
        for index in 0..3 {
            filter.apply_filter(index);
            let selection = filter.selection().clone();
            for entry in filter.entries() {
                assert_eq!(entry.visibility.is_shown(), selection.matches(&entry.tags));
            }
        }
    }

    #[test]
    fn disabled_control_is_a_no_op() {
        let mut filter = sample();
        filter.apply_filter(1);
        let before = shown(&filter);

        assert!(filter.apply_filter(3).is_none());
        assert_eq!(filter.active_control(), Some(1));
        assert_eq!(filter.selection().as_str(), "mobile");
        assert_eq!(shown(&filter), before);
    }

    #[test]
    fn control_disabled_after_load_is_ignored() {
        let mut filter = sample();
        filter.set_control_disabled(2, true);
        assert!(filter.apply_filter(2).is_none());
        assert!(filter.selection().is_all());

        filter.set_control_disabled(2, false);
        assert!(filter.apply_filter(2).is_some());
    }

    #[test]
    fn out_of_range_control_is_ignored() {
        let mut filter = sample();
        assert!(filter.apply_filter(42).is_none());
        assert_eq!(filter.active_control(), Some(0));
    }

    #[test]
    fn clear_filters_shows_everything_and_activates_all() {
        let mut filter = sample();
        filter.apply_filter(2);
        filter.clear_filters();
        assert_eq!(shown(&filter), vec![true, true, true]);
        assert_eq!(filter.active_control(), Some(0));
        assert!(filter.selection().is_all());
        assert_eq!(
            filter.layout(),
            vec![
                Some(LayoutSide::Left),
                Some(LayoutSide::Right),
                Some(LayoutSide::Left)
            ]
        );
    }

    #[test]
    fn clear_without_all_control_leaves_none_active() {
        let mut filter = ProjectFilter::new(
            vec![FilterControl::new("web")],
            vec![ProjectEntry::new("web"), ProjectEntry::new("data")],
        );
        filter.apply_filter(0);
        filter.clear_filters();
        assert_eq!(filter.active_control(), None);
        assert_eq!(filter.visible_indices(), vec![0, 1]);
    }

    #[test]
    fn layout_starts_left_after_hidden_prefix() {
        assert_eq!(
            alternating_layout(&[false, false, true, false, true, true]),
            vec![
                None,
                None,
                Some(LayoutSide::Left),
                None,
                Some(LayoutSide::Right),
                Some(LayoutSide::Left)
            ]
        );
        assert!(alternating_layout(&[]).is_empty());
    }

    #[test]
    fn initial_active_control_from_markup() {
        let filter = sample().with_active_control(Some(1));
        assert_eq!(filter.selection().as_str(), "mobile");
        let filter = sample().with_active_control(Some(99));
        assert_eq!(filter.active_control(), Some(0));
    }

    #[test]
    fn visibility_style_values_move_together() {
        assert_eq!(
            (Visibility::Shown.display(), Visibility::Shown.opacity()),
            ("block", "1")
        );
        assert_eq!(
            (Visibility::Hidden.display(), Visibility::Hidden.opacity()),
            ("none", "0")
        );
    }
}
