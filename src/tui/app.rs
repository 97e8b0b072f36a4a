use ratatui::widgets::ListState;

use crate::domain::{DiscountLine, DiscountTier, VehicleRecord, WeeklyUpdate};
use crate::store::VehicleData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Sections,
    Entries,
    Details,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Sections => ActivePane::Entries,
            ActivePane::Entries => ActivePane::Details,
            ActivePane::Details => ActivePane::Sections,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActivePane::Sections => ActivePane::Details,
            ActivePane::Entries => ActivePane::Sections,
            ActivePane::Details => ActivePane::Entries,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Spotlight,
    Robberies,
    Bonuses,
    Discounts,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Spotlight,
        Section::Robberies,
        Section::Bonuses,
        Section::Discounts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Spotlight => "Spotlight",
            Section::Robberies => "Robberies",
            Section::Bonuses => "Bonuses",
            Section::Discounts => "Discounts",
        }
    }
}

/// One row of the entries pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub value: String,
    /// Name to look up in the vehicle data, for rows that name a vehicle
    pub vehicle: Option<String>,
}

impl Entry {
    fn text(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            vehicle: None,
        }
    }

    fn vehicle(label: &str, name: &str) -> Self {
        Self {
            label: label.to_string(),
            value: name.to_string(),
            vehicle: WeeklyUpdate::is_found(name).then(|| name.to_string()),
        }
    }

    pub fn display(&self) -> String {
        if self.label.is_empty() {
            self.value.clone()
        } else {
            format!("{}: {}", self.label, self.value)
        }
    }
}

/// Rows shown for `section` of `update`.
pub fn section_entries(update: &WeeklyUpdate, section: Section) -> Vec<Entry> {
    match section {
        Section::Overview => {
            let mut entries = vec![Entry::text("Week of", &update.week_of)];
            entries.extend(update.intro_messages.iter().map(|m| Entry::text("", m)));
            entries.push(Entry::text("Weekly Challenge", &update.weekly_challenge));
            entries.push(Entry::text("Time Trial", &update.time_trial));
            entries.push(Entry::text("HSW Time Trial", &update.hsw_time_trial));
            entries.push(Entry::text("Premium Race", &update.premium_race));
            entries
        }
        Section::Spotlight => vec![
            Entry::vehicle("Podium Vehicle", &update.podium_vehicle),
            Entry::vehicle("Prize Ride", &update.prize_ride_vehicle),
            Entry::text("Prize Ride Challenge", &update.prize_ride_challenge),
        ],
        Section::Robberies => update
            .salvage_yard_robberies
            .iter()
            .map(|r| Entry::vehicle(&r.kind, &r.vehicle))
            .collect(),
        Section::Bonuses => update
            .bonuses
            .iter()
            .map(|b| match b.split_once(" - ") {
                Some((multiplier, item)) => Entry::text(multiplier, item),
                None => Entry::text("", b),
            })
            .collect(),
        Section::Discounts => update
            .discounts
            .iter()
            .map(|d| match DiscountLine::parse(d) {
                Some(line) if line.tier() != DiscountTier::Other => {
                    Entry::vehicle(&line.label, &line.item)
                }
                Some(line) => Entry::text(&line.label, &line.item),
                None => Entry::text("", d),
            })
            .collect(),
    }
}

pub const PAGE_SIZE: usize = 10;

pub struct TuiApp {
    pub active_pane: ActivePane,
    pub update: Option<WeeklyUpdate>,
    pub vehicles: VehicleData,
    pub entries: Vec<Entry>,
    pub section_index: usize,
    pub entry_index: usize,
    pub detail_scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_refreshing: bool,
    pub section_list_state: ListState,
    pub entry_list_state: ListState,
}

impl TuiApp {
    pub fn new() -> Self {
        let mut section_list_state = ListState::default();
        section_list_state.select(Some(0));
        let mut entry_list_state = ListState::default();
        entry_list_state.select(Some(0));

        Self {
            active_pane: ActivePane::Sections,
            update: None,
            vehicles: VehicleData::new(),
            entries: Vec::new(),
            section_index: 0,
            entry_index: 0,
            detail_scroll: 0,
            should_quit: false,
            status_message: None,
            is_refreshing: false,
            section_list_state,
            entry_list_state,
        }
    }

    /// Replace the displayed data, keeping the current section.
    pub fn load(&mut self, update: Option<WeeklyUpdate>, vehicles: VehicleData) {
        self.update = update;
        self.vehicles = vehicles;
        self.reload_entries();
    }

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.section_index]
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.entry_index)
    }

    /// Vehicle data for the selected entry, if it names a resolved vehicle.
    pub fn selected_vehicle(&self) -> Option<(&str, &VehicleRecord)> {
        let name = self.selected_entry()?.vehicle.as_deref()?;
        self.vehicles.get(name).map(|record| (name, record))
    }

    fn reload_entries(&mut self) {
        self.entries = self
            .update
            .as_ref()
            .map(|u| section_entries(u, self.selected_section()))
            .unwrap_or_default();
        self.entry_index = self.entry_index.min(self.entries.len().saturating_sub(1));
        self.entry_list_state.select(Some(self.entry_index));
        self.detail_scroll = 0;
    }

    fn select_section(&mut self, index: usize) {
        if index != self.section_index {
            self.section_index = index;
            self.section_list_state.select(Some(index));
            self.entry_index = 0;
            self.reload_entries();
        }
    }

    fn select_entry(&mut self, index: usize) {
        if index != self.entry_index {
            self.entry_index = index;
            self.entry_list_state.select(Some(index));
            self.detail_scroll = 0;
        }
    }

    pub fn move_up(&mut self) {
        match self.active_pane {
            ActivePane::Sections => self.select_section(self.section_index.saturating_sub(1)),
            ActivePane::Entries => self.select_entry(self.entry_index.saturating_sub(1)),
            ActivePane::Details => self.detail_scroll = self.detail_scroll.saturating_sub(1),
        }
    }

    pub fn move_down(&mut self) {
        match self.active_pane {
            ActivePane::Sections => {
                let max_index = Section::ALL.len() - 1;
                self.select_section((self.section_index + 1).min(max_index));
            }
            ActivePane::Entries => {
                let max_index = self.entries.len().saturating_sub(1);
                self.select_entry((self.entry_index + 1).min(max_index));
            }
            ActivePane::Details => self.detail_scroll = self.detail_scroll.saturating_add(1),
        }
    }

    pub fn next_page(&mut self) {
        match self.active_pane {
            ActivePane::Sections => self.select_section(Section::ALL.len() - 1),
            ActivePane::Entries => {
                let max_index = self.entries.len().saturating_sub(1);
                self.select_entry((self.entry_index + PAGE_SIZE).min(max_index));
            }
            ActivePane::Details => {
                self.detail_scroll = self.detail_scroll.saturating_add(PAGE_SIZE as u16);
            }
        }
    }

    pub fn prev_page(&mut self) {
        match self.active_pane {
            ActivePane::Sections => self.select_section(0),
            ActivePane::Entries => self.select_entry(self.entry_index.saturating_sub(PAGE_SIZE)),
            ActivePane::Details => {
                self.detail_scroll = self.detail_scroll.saturating_sub(PAGE_SIZE as u16);
            }
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Robbery, NOT_FOUND};

    fn update() -> WeeklyUpdate {
        WeeklyUpdate {
            week_of: "March 6th".into(),
            podium_vehicle: "Cheval Taipan".into(),
            prize_ride_vehicle: NOT_FOUND.into(),
            salvage_yard_robberies: vec![Robbery::new("The Duggan Robbery", "Rhino Tank")],
            bonuses: vec!["2X GTA$ and RP - Stunt Races".into()],
            discounts: (0..15)
                .map(|i| format!("30% Off: Vehicle {}", i))
                .chain(["Half Price: Hangars".to_string()])
                .collect(),
            ..Default::default()
        }
    }

    fn vehicles() -> VehicleData {
        let mut vehicles = VehicleData::new();
        vehicles.insert(
            "Cheval Taipan".into(),
            VehicleRecord {
                category: "Podium Vehicle".into(),
                url: "https://gtacars.net/gta5/taipan".into(),
                ..Default::default()
            },
        );
        vehicles
    }

    fn loaded() -> TuiApp {
        let mut app = TuiApp::new();
        app.load(Some(update()), vehicles());
        app
    }

    #[test]
    fn test_pane_cycle() {
        assert_eq!(ActivePane::Sections.next(), ActivePane::Entries);
        assert_eq!(ActivePane::Details.next(), ActivePane::Sections);
        assert_eq!(ActivePane::Sections.prev(), ActivePane::Details);
    }

    #[test]
    fn test_empty_app_has_no_entries() {
        let mut app = TuiApp::new();
        app.load(None, VehicleData::new());
        assert!(app.entries.is_empty());
        assert!(app.selected_entry().is_none());
        app.active_pane = ActivePane::Entries;
        app.move_down();
        assert_eq!(app.entry_index, 0);
    }

    #[test]
    fn test_overview_entries() {
        let app = loaded();
        assert_eq!(app.selected_section(), Section::Overview);
        assert_eq!(app.entries[0].display(), "Week of: March 6th");
    }

    #[test]
    fn test_section_navigation_reloads_entries() {
        let mut app = loaded();
        app.move_down();
        assert_eq!(app.selected_section(), Section::Spotlight);
        assert_eq!(app.entries.len(), 3);

        let (name, record) = app.selected_vehicle().unwrap();
        assert_eq!(name, "Cheval Taipan");
        assert_eq!(record.category, "Podium Vehicle");

        // "Not found" does not link to vehicle data
        assert!(app.entries[1].vehicle.is_none());
    }

    #[test]
    fn test_bonus_entries_split_multiplier() {
        let entries = section_entries(&update(), Section::Bonuses);
        assert_eq!(entries[0].label, "2X GTA$ and RP");
        assert_eq!(entries[0].value, "Stunt Races");
    }

    #[test]
    fn test_discount_entries() {
        let entries = section_entries(&update(), Section::Discounts);
        assert_eq!(entries.len(), 16);
        assert_eq!(entries[0].vehicle.as_deref(), Some("Vehicle 0"));
        assert_eq!(entries[15].label, "Half Price");
        assert!(entries[15].vehicle.is_none());
    }

    #[test]
    fn test_paging_entries() {
        let mut app = loaded();
        app.next_page();
        assert_eq!(app.selected_section(), Section::Discounts);

        app.active_pane = ActivePane::Entries;
        app.next_page();
        assert_eq!(app.entry_index, 10);
        app.next_page();
        assert_eq!(app.entry_index, 15);
        app.prev_page();
        assert_eq!(app.entry_index, 5);
        assert_eq!(app.entry_list_state.selected(), Some(5));
    }

    #[test]
    fn test_detail_scroll() {
        let mut app = loaded();
        app.active_pane = ActivePane::Details;
        app.move_up();
        assert_eq!(app.detail_scroll, 0);
        app.next_page();
        assert_eq!(app.detail_scroll, PAGE_SIZE as u16);
    }

    #[test]
    fn test_reload_clamps_entry_index() {
        let mut app = loaded();
        app.next_page();
        app.active_pane = ActivePane::Entries;
        app.next_page();
        app.next_page();
        assert_eq!(app.entry_index, 15);

        let mut smaller = update();
        smaller.discounts.truncate(2);
        app.load(Some(smaller), VehicleData::new());
        assert_eq!(app.entry_index, 1);
    }
}
