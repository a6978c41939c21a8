use crate::shell::main::Shell;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xf0, 0xf0, 0xf0);
const BUTTON_GREEN: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xaf, 0x50);

struct ShellWindow {
    shell: Shell,
    texture: Option<(u64, egui::TextureHandle)>,
}

impl ShellWindow {
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(preview) = &self.shell.state().preview else {
            return;
        };

        if matches!(&self.texture, Some((revision, _)) if *revision == preview.revision) {
            return;
        }

        let size = [preview.image.width() as usize, preview.image.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, preview.image.as_raw());
        let handle = ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR);
        self.texture = Some((preview.revision, handle));
    }
}

impl eframe::App for ShellWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_texture(ctx);

        let mut upload_clicked = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(&self.shell.config().window_title)
                            .size(24.0)
                            .strong(),
                    );
                    ui.add_space(10.0);

                    let button = egui::Button::new(
                        egui::RichText::new("Upload Image")
                            .size(18.0)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(BUTTON_GREEN);
                    upload_clicked = ui.add(button).clicked();
                    ui.add_space(10.0);

                    if let Some((_, texture)) = &self.texture {
                        ui.image(texture);
                        ui.add_space(10.0);
                    }

                    ui.scope(|ui| {
                        ui.set_max_width(400.0);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&self.shell.state().result_text).size(18.0),
                            )
                            .wrap(true),
                        );
                    });
                    ui.add_space(10.0);

                    ui.label(
                        egui::RichText::new("Classification Log")
                            .size(18.0)
                            .strong(),
                    );
                    ui.add_space(10.0);

                    egui::Frame::group(ui.style())
                        .fill(egui::Color32::WHITE)
                        .show(ui, |ui| {
                            egui::ScrollArea::vertical()
                                .max_height(200.0)
                                .auto_shrink([false, false])
                                .stick_to_bottom(true)
                                .show(ui, |ui| {
                                    for entry in &self.shell.state().log {
                                        ui.label(entry);
                                    }
                                });
                        });
                });
            });

        if upload_clicked {
            self.shell.upload();
        }
    }
}

/// Opens the window and blocks until it is closed.
pub fn run(shell: Shell) -> Result<(), eframe::Error> {
    let (width, height) = shell.config().window_size;
    let title = shell.config().window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([width, height]),
        ..Default::default()
    };

    let window = ShellWindow {
        shell,
        texture: None,
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(window)
        }),
    )
}
