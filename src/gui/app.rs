use iced::widget::{button, column, row, scrollable, slider, text};
use iced::{Element, Length, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

use super::widgets::{image_panel, layout, metric, notice, region_table};
use super::{AppState, Message, state::Notice};
use crate::export::{self, CSV_FILE_NAME, Summary};
use crate::models::{PARAM_MAX, PARAM_MIN, PARAM_STEP};

const EXPLANATION: &str = "\
- Every slider change re-runs the pipeline and redraws the page.\n\
- The sliders set the minimum object and hole sizes used to clean the Otsu mask.\n\
- Results are cached per (image, parameters); the clear button drops the cache.\n\
- The table rounds statistics to two decimals; the CSV keeps full precision.";

pub struct CoinsegApp {
    state: AppState,
}

impl CoinsegApp {
    pub fn boot() -> (Self, Task<Message>) {
        let mut state = AppState::default();
        state.recompute();
        (Self { state }, Task::none())
    }

    pub fn title(&self) -> String {
        "Coins demo: Otsu segmentation".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MinObjectSizeChanged(value) => {
                self.state.parameters.min_object_size = value;
                self.state.recompute();
                Task::none()
            }
            Message::MinHoleSizeChanged(value) => {
                self.state.parameters.min_hole_size = value;
                self.state.recompute();
                Task::none()
            }
            Message::ClearCache => {
                self.state.clear_cache();
                Task::none()
            }
            Message::ExportCsv => match &self.state.current {
                Some(current) => match export::to_csv_bytes(&current.result.regions) {
                    Ok(bytes) => Task::perform(save_csv_dialog(bytes), Message::CsvExported),
                    Err(e) => {
                        self.state.notice =
                            Some(Notice::Error(format!("Failed to build CSV: {}", e)));
                        Task::none()
                    }
                },
                None => Task::none(),
            },
            Message::CsvExported(outcome) => {
                match outcome {
                    Ok(Some(path)) => {
                        tracing::info!("exported CSV to {}", path.display());
                        self.state.notice =
                            Some(Notice::Success(format!("Saved {}", path.display())));
                    }
                    Ok(None) => {}
                    Err(e) => self.state.notice = Some(Notice::Error(e)),
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let params = self.state.parameters;

        let mut sidebar = column![
            text("Parameters").size(22),
            text(format!("Minimum object size (px): {}", params.min_object_size)),
            slider(
                PARAM_MIN..=PARAM_MAX,
                params.min_object_size,
                Message::MinObjectSizeChanged
            )
            .step(PARAM_STEP),
            text(format!("Minimum hole size (px): {}", params.min_hole_size)),
            slider(
                PARAM_MIN..=PARAM_MAX,
                params.min_hole_size,
                Message::MinHoleSizeChanged
            )
            .step(PARAM_STEP),
            button("Clear data cache").on_press(Message::ClearCache),
        ]
        .spacing(12);

        if let Some(n) = &self.state.notice {
            sidebar = sidebar.push(notice(n));
        }

        let (width, height) = self.state.source.dimensions();
        let original = image_panel(
            &self.state.source_handle,
            format!("Original ({}x{})", width, height),
        );

        let main: Element<'_, Message> = match &self.state.current {
            Some(current) => {
                let summary = Summary::new(&current.result, current.elapsed_secs);
                let [m1, m2, m3] = summary.metrics();

                column![
                    text("Simple segmentation of the coins sample").size(30),
                    text("The image is binarized, the mask cleaned, regions labeled and measured."),
                    row![
                        metric(m1.0, m1.1),
                        metric(m2.0, m2.1),
                        metric(m3.0, m3.1),
                    ]
                    .spacing(12),
                    row![
                        original,
                        image_panel(&current.cleaned, "Cleaned mask".to_string()),
                        image_panel(&current.overlay, "Labels overlaid".to_string()),
                    ]
                    .spacing(12),
                    text("Region features").size(22),
                    region_table(&current.result.regions),
                    button("Download table (CSV)").on_press(Message::ExportCsv),
                    text("What is happening here?").size(18),
                    text(EXPLANATION).size(14),
                ]
                .spacing(14)
                .into()
            }
            None => column![
                text("Nothing to display").size(30),
                original,
            ]
            .spacing(14)
            .into(),
        };

        layout(sidebar, scrollable(main).height(Length::Fill))
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

async fn save_csv_dialog(bytes: Vec<u8>) -> Result<Option<PathBuf>, String> {
    let Some(handle) = AsyncFileDialog::new()
        .set_title("Save region table")
        .set_file_name(CSV_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    std::fs::write(&path, bytes).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(Some(path))
}
