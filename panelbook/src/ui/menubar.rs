use crate::app::Panelbook;
use crate::consts::REPOSITORY_URL;
use egui::{Button, Modifiers};
use std::env;
use std::process::Command;
use tracing::error;

const BTN_WIDTH: f32 = 200.0;

impl Panelbook {
    pub fn menubar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            // View
            self.view_menu(ui);
            // Window
            window_menu(ui);
            // Help
            help_menu(ui);
        });
    }

    fn view_menu(&mut self, ui: &mut egui::Ui) {
        let toggle_shortcut = egui::KeyboardShortcut::new(Modifiers::CTRL, egui::Key::D);
        if ui.input_mut(|i| i.consume_shortcut(&toggle_shortcut)) {
            self.direction.toggle();
        }
        ui.menu_button("View", |ui| {
            let toggle_shortcut = ui.ctx().format_shortcut(&toggle_shortcut);
            let toggle_btn = Button::new("Toggle Direction")
                .min_size((BTN_WIDTH, 0.).into())
                .shortcut_text(toggle_shortcut);
            if ui.add(toggle_btn).clicked() {
                self.direction.toggle();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                std::process::exit(0);
            }
        });
    }
}

fn window_menu(ui: &mut egui::Ui) {
    ui.menu_button("Window", |ui| {
        let new_window_btn = Button::new("New Window").min_size((BTN_WIDTH, 0.).into());
        if ui.add(new_window_btn).clicked() {
            match env::current_exe() {
                Ok(path) => {
                    let mut child = Command::new(path);

                    #[cfg(windows)]
                    {
                        use std::os::windows::process::CommandExt;
                        use windows::Win32::System::Threading::CREATE_NEW_PROCESS_GROUP;

                        child.creation_flags(CREATE_NEW_PROCESS_GROUP.0 as u32);
                    }

                    #[cfg(unix)]
                    {
                        use std::os::unix::prelude::CommandExt;
                        unsafe {
                            child.pre_exec(|| {
                                let _ = rustix::process::setsid();
                                Ok(())
                            });
                        }
                    }

                    if let Err(err) = child.spawn() {
                        error!("failed to launch new window: {err}");
                    }
                }
                Err(err) => error!("failed to get current exe path: {err}"),
            }
            ui.close_menu();
        }
    });
}

fn help_menu(ui: &mut egui::Ui) {
    ui.menu_button("Help", |ui| {
        let about_btn = Button::new("About").min_size((BTN_WIDTH, 0.).into());
        if ui.add(about_btn).clicked() {
            if let Err(err) = open::that(REPOSITORY_URL) {
                error!("opening page {REPOSITORY_URL} error: {err}");
            }
        }
    });
}
