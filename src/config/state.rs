// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the input box
    pub input_text: String,

    /// Output text field; mapped into ExportOptions on export
    pub out_path_text: String,
    pub out_path_dirty: bool,

    /// Identity pool editor, one agent per line
    pub user_agents_text: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_text: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
            user_agents_text: s!(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Build from persisted settings; text fields mirror the options.
    pub fn from_settings(settings: super::settings::Settings) -> Self {
        let options = settings.options;
        let gui = GuiState {
            input_text: settings.last_input,
            out_path_text: options.export.out_path().to_string_lossy().into_owned(),
            user_agents_text: options.scrape.user_agents.join("\n"),
            ..GuiState::default()
        };
        Self { options, gui }
    }

    pub fn to_settings(&self) -> super::settings::Settings {
        super::settings::Settings {
            last_input: self.gui.input_text.clone(),
            options: self.options.clone(),
        }
    }

    /// Push the identity editor text into the scrape options.
    pub fn apply_user_agents_text(&mut self) {
        self.options.scrape.user_agents = self
            .gui
            .user_agents_text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| s!(l))
            .collect();
    }

    /// Push the output text field into ExportOptions, if the user touched it.
    pub fn apply_out_path_text(&mut self) {
        if self.gui.out_path_dirty {
            self.options.export.set_path(&self.gui.out_path_text);
            self.gui.out_path_dirty = false;
        }
    }
}
