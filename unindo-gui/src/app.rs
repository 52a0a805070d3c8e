use crate::toast::ToastOverlay;
use eframe::egui;
use notification_center::{
    NotificationCenter, NotificationRequest, NotificationSettings, NotificationStatus,
};

const STATUS_CHOICES: [(Option<NotificationStatus>, &str); 4] = [
    (None, "none"),
    (Some(NotificationStatus::Success), "success"),
    (Some(NotificationStatus::Error), "error"),
    (Some(NotificationStatus::Info), "info"),
];

/// Draft for the "custom toast" form.
#[derive(Debug, Clone, Default)]
pub(crate) struct ToastDraft {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) status: Option<NotificationStatus>,
}

impl ToastDraft {
    pub(crate) fn to_request(&self) -> NotificationRequest {
        let mut request = NotificationRequest::new(self.title.trim());
        if !self.description.trim().is_empty() {
            request = request.description(self.description.trim());
        }
        if let Some(status) = self.status {
            request = request.status(status);
        }
        request
    }
}

/// Window hosting the toast overlay plus the flows that raise toasts.
pub(crate) struct DemoApp {
    center: NotificationCenter,
    overlay: ToastOverlay,
    draft: ToastDraft,
}

impl DemoApp {
    pub(crate) fn new(settings: &NotificationSettings) -> Self {
        Self {
            center: NotificationCenter::new(),
            overlay: ToastOverlay::new(settings),
            draft: ToastDraft::default(),
        }
    }

    fn render_presets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Salvar viagem").clicked() {
                self.center
                    .success("Viagem salva", Some("Sua viagem foi criada com sucesso."));
            }
            if ui.button("Enviar solicitação").clicked() {
                self.center
                    .info("Solicitação enviada", Some("Aguarde a resposta do organizador."));
            }
            if ui.button("Falha de rede").clicked() {
                self.center
                    .error("Erro", Some("Não foi possível contatar o servidor."));
            }
            if ui.button("Salvo").clicked() {
                self.center.show("Salvo");
            }
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("toast_form").num_columns(2).show(ui, |ui| {
            ui.label("Title");
            ui.text_edit_singleline(&mut self.draft.title);
            ui.end_row();
            ui.label("Description");
            ui.text_edit_singleline(&mut self.draft.description);
            ui.end_row();
            ui.label("Status");
            egui::ComboBox::from_id_source("toast_status")
                .selected_text(status_label(self.draft.status))
                .show_ui(ui, |ui| {
                    for (status, label) in STATUS_CHOICES {
                        ui.selectable_value(&mut self.draft.status, status, label);
                    }
                });
            ui.end_row();
        });
        if ui.button("Show").clicked() {
            self.center.show(self.draft.to_request());
        }
    }

    fn render_active(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("{} active", self.center.len()));
        let mut dismissed = None;
        for item in self.center.items() {
            ui.horizontal(|ui| {
                ui.monospace(item.id.as_str());
                ui.label(&item.title);
                if ui.small_button("Remove").clicked() {
                    dismissed = Some(item.id.clone());
                }
            });
        }
        if let Some(id) = dismissed {
            self.center.remove(&id);
        }
    }
}

fn status_label(status: Option<NotificationStatus>) -> &'static str {
    status.map(NotificationStatus::as_str).unwrap_or("none")
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Unindo Destinos");
            ui.separator();
            self.render_presets(ui);
            ui.separator();
            self.render_form(ui);
            ui.separator();
            self.render_active(ui);
        });
        self.overlay.show(ctx, &mut self.center);
    }
}
