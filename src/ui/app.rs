use crate::data::Calibration;
use crate::export::{export_report, ExportFormat};
use crate::model::{Development, Floor, House, MarkerPosition};
use crate::session::{ActiveView, Session};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;
use tracing::warn;

/// Marker step, in percent of the plan, for one calibration key press.
const MARKER_STEP: f64 = 1.0;

/// File calibration is saved to when none was given on the command line.
const DEFAULT_CALIBRATION_FILE: &str = "calibration.json";

pub struct App {
    pub development: Development,
    pub session: Session,
    pub calibration: Calibration,
    pub calibration_path: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub selected_house: usize,
    pub selected_room: usize,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Starts on the session's house, or on the first house if the session
    /// names one the development does not have.
    #[must_use]
    pub fn new(development: Development, mut session: Session) -> Self {
        let selected_house = development.position(session.house_id()).unwrap_or(0);
        if let Some(house) = development.houses.get(selected_house) {
            session.select_house(&house.id);
        }

        Self {
            development,
            session,
            calibration: Calibration::default(),
            calibration_path: None,
            out_dir: PathBuf::from("."),
            selected_house,
            selected_room: 0,
            status: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_calibration(mut self, calibration: Calibration, path: Option<PathBuf>) -> Self {
        self.calibration = calibration;
        self.calibration_path = path;
        self
    }

    #[must_use]
    pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
        self.out_dir = out_dir;
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.session.view() {
            ActiveView::Standard => super::dashboard::draw_dashboard(frame, self),
            ActiveView::PlanExpanded => super::dashboard::draw_plan(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.session.view() {
            ActiveView::Standard => self.handle_dashboard_keys(code),
            ActiveView::PlanExpanded => self.handle_plan_keys(code),
        }
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.previous_house(),
            KeyCode::Right | KeyCode::Char('l') => self.next_house(),
            KeyCode::Tab | KeyCode::Char(']') => self.change_floor(true),
            KeyCode::BackTab | KeyCode::Char('[') => self.change_floor(false),
            KeyCode::Enter | KeyCode::Char('p') => self.session.open_viewer(),
            KeyCode::Char('e') => self.export(),
            _ => self.handle_room_keys(code),
        }
    }

    fn handle_plan_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.session.close_viewer(),
            KeyCode::Char('H') => self.nudge_marker(-MARKER_STEP, 0.0),
            KeyCode::Char('L') => self.nudge_marker(MARKER_STEP, 0.0),
            KeyCode::Char('K') => self.nudge_marker(0.0, -MARKER_STEP),
            KeyCode::Char('J') => self.nudge_marker(0.0, MARKER_STEP),
            KeyCode::Char('s') => self.save_calibration(),
            _ => self.handle_room_keys(code),
        }
    }

    /// Keys shared by both views: room cursor, selection and toggles.
    fn handle_room_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.previous_room(),
            KeyCode::Down | KeyCode::Char('j') => self.next_room(),
            KeyCode::Char(' ') => self.toggle_current_room(),
            KeyCode::Char('a') => {
                if let Some(house) = self.development.houses.get(self.selected_house) {
                    self.session.select_all_rooms(house.floor(self.session.floor()));
                }
            }
            KeyCode::Char('c') => self.session.clear_selection(),
            KeyCode::Char('m') => self.session.toggle_display_mode(),
            KeyCode::Char('v') => self.session.toggle_vat(),
            _ => {}
        }
    }

    fn previous_house(&mut self) {
        if self.selected_house > 0 {
            self.select_house(self.selected_house - 1);
        }
    }

    fn next_house(&mut self) {
        if self.selected_house < self.development.houses.len().saturating_sub(1) {
            self.select_house(self.selected_house + 1);
        }
    }

    fn select_house(&mut self, index: usize) {
        let Some(house) = self.development.houses.get(index) else {
            return;
        };
        self.selected_house = index;
        if self.session.select_house(&house.id) {
            self.selected_room = 0;
            self.status = None;
        }
    }

    fn change_floor(&mut self, up: bool) {
        let current = self.session.floor();
        let floor = if up { current.next() } else { current.previous() };
        self.session.select_floor(floor);
        self.selected_room = 0;
    }

    fn previous_room(&mut self) {
        self.selected_room = self.selected_room.saturating_sub(1);
    }

    fn next_room(&mut self) {
        let count = self.current_floor().map_or(0, |floor| floor.rooms.len());
        if self.selected_room < count.saturating_sub(1) {
            self.selected_room += 1;
        }
    }

    fn toggle_current_room(&mut self) {
        let name = self.current_room_name();
        if let Some(name) = name {
            self.session.toggle_room(&name);
        }
    }

    fn current_room_name(&self) -> Option<String> {
        self.current_floor()?
            .rooms
            .get(self.selected_room)
            .map(|r| r.name.clone())
    }

    /// Moves the marker of the room under the cursor and re-applies the
    /// calibration to every house.
    fn nudge_marker(&mut self, dx: f64, dy: f64) {
        let Some(room_name) = self.current_room_name() else {
            return;
        };
        let floor = self.session.floor();
        let current = self
            .calibration
            .marker(floor, &room_name)
            .or_else(|| {
                self.current_floor()?
                    .room(&room_name)
                    .and_then(|r| r.marker_position)
            })
            .unwrap_or_else(MarkerPosition::center);

        self.calibration
            .set_marker(floor, &room_name, current.nudged(dx, dy));
        self.calibration.apply(&mut self.development);
    }

    fn save_calibration(&mut self) {
        let path = self
            .calibration_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CALIBRATION_FILE));

        self.status = Some(match self.calibration.save(&path) {
            Ok(()) => format!("Calibration saved to {}", path.display()),
            Err(e) => {
                warn!(error = %e, "calibration save failed");
                format!("Calibration not saved: {e}")
            }
        });
    }

    fn export(&mut self) {
        let Some(house) = self.current_house() else {
            self.status = Some("No house to export".to_string());
            return;
        };
        let result = self
            .session
            .report(house)
            .map_err(|e| e.to_string())
            .and_then(|report| {
                export_report(&report, &self.out_dir, ExportFormat::Text)
                    .map_err(|e| e.to_string())
            });

        self.status = Some(match result {
            Ok(path) => format!("Report exported to {}", path.display()),
            Err(message) => {
                warn!(%message, "report export failed");
                format!("Export failed: {message}")
            }
        });
    }

    /// `None` only for a development without houses.
    #[must_use]
    pub fn current_house(&self) -> Option<&House> {
        self.development.houses.get(self.selected_house)
    }

    #[must_use]
    pub fn current_floor(&self) -> Option<&Floor> {
        self.current_house()
            .map(|house| self.session.active_floor(house))
    }

    /// Running total of the ticked rooms on the active floor.
    #[must_use]
    pub fn selected_total(&self) -> f64 {
        self.current_house()
            .map_or(0.0, |house| self.session.total_selected_area(house))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::DisplayMode;
    use crate::data::builtin_development;
    use crate::model::FloorName;

    fn app() -> App {
        App::new(builtin_development(), Session::new("V3"))
    }

    #[test]
    fn test_starts_on_session_house_and_ground_floor() {
        let app = app();
        assert_eq!(app.current_house().unwrap().id, "V3");
        assert_eq!(app.current_floor().unwrap().name, FloorName::GroundFloor);
    }

    #[test]
    fn test_unknown_house_falls_back_to_first() {
        let app = App::new(builtin_development(), Session::new("V99"));
        assert_eq!(app.current_house().unwrap().id, "V1");
        assert_eq!(app.session.house_id(), "V1");
    }

    #[test]
    fn test_space_toggles_room_under_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char(' '));

        assert!(app.session.selection().contains("Cocina"));
        assert!((app.selected_total() - 8.02).abs() < 1e-9);

        app.handle_key(KeyCode::Char(' '));
        assert!(app.session.selection().is_empty());
    }

    #[test]
    fn test_switching_house_resets_selection_and_view() {
        let mut app = app();
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session.view(), ActiveView::PlanExpanded);

        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Right);

        assert_eq!(app.current_house().unwrap().id, "V4");
        assert!(app.session.selection().is_empty());
        assert_eq!(app.session.view(), ActiveView::Standard);
    }

    #[test]
    fn test_mode_and_vat_keys_flip_session() {
        let mut app = app();
        app.handle_key(KeyCode::Char('m'));
        app.handle_key(KeyCode::Char('v'));

        assert_eq!(app.session.display_mode(), DisplayMode::Constructed);
        assert!(app.session.include_vat());
    }

    #[test]
    fn test_floor_keys_wrap_and_clear_selection() {
        let mut app = app();
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::BackTab);

        assert_eq!(app.session.floor(), FloorName::RoofFloor);
        assert!(app.session.selection().is_empty());
    }

    #[test]
    fn test_nudge_moves_marker_in_every_house() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('L'));
        app.handle_key(KeyCode::Char('J'));

        let expected = Some(MarkerPosition::clamped(51.0, 51.0));
        for house in &app.development.houses {
            let room = house.floor(FloorName::GroundFloor).room("Salón").unwrap();
            assert_eq!(room.marker_position, expected);
        }
    }

    #[test]
    fn test_export_writes_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app().with_out_dir(dir.path().to_path_buf());
        app.handle_key(KeyCode::Char('e'));

        assert!(dir.path().join("Informe_V3_Utiles.txt").exists());
        assert!(app.status.unwrap().starts_with("Report exported"));
    }
}
