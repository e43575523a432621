//! File staging for multipart uploads.
//!
//! Files are checked when picked; rejected files never reach the staged list
//! and are reported one by one through `on_error`.

use crate::shared::icons::icon;
use contracts::shared::validation::{validate_upload, UploadKind, ValidationError};
use leptos::prelude::*;
use thaw::*;
use web_sys::{File, HtmlInputElement, Url};

/// A picked file waiting for submission
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub file: File,
    pub name: String,
    pub size: u64,
    /// Object URL for image previews; revoked on removal
    pub preview_url: Option<String>,
}

impl StagedFile {
    fn stage(kind: UploadKind, file: File) -> Result<Self, ValidationError> {
        let name = file.name();
        let size = file.size() as u64;
        validate_upload(kind, &name, &file.type_(), size)?;
        let preview_url = match kind {
            UploadKind::Image => Url::create_object_url_with_blob(&file).ok(),
            UploadKind::Document => None,
        };
        Ok(Self {
            file,
            name,
            size,
            preview_url,
        })
    }

    pub fn release(&self) {
        if let Some(url) = &self.preview_url {
            let _ = Url::revoke_object_url(url);
        }
    }

    pub fn size_label(&self) -> String {
        format_size(self.size)
    }
}

pub type StagedFiles = RwSignal<Vec<StagedFile>, LocalStorage>;

pub fn staged_files() -> StagedFiles {
    RwSignal::new_local(Vec::new())
}

/// Drop every staged file and release its preview
pub fn clear_staged(files: StagedFiles) {
    files.update(|list| {
        for file in list.drain(..) {
            file.release();
        }
    });
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[component]
pub fn FilePicker(
    /// What the input accepts
    kind: UploadKind,
    #[prop(into)] label: String,
    files: StagedFiles,
    /// Keep several files instead of replacing the current one
    #[prop(optional)]
    multiple: bool,
    #[prop(into)] disabled: Signal<bool>,
    on_error: Callback<String>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let mut accepted = Vec::new();
        for index in 0..list.length() {
            let Some(file) = list.get(index) else {
                continue;
            };
            match StagedFile::stage(kind, file) {
                Ok(staged) => accepted.push(staged),
                Err(e) => on_error.run(e.to_string()),
            }
        }
        if !accepted.is_empty() {
            files.update(|current| {
                if !multiple {
                    for old in current.drain(..) {
                        old.release();
                    }
                    accepted.truncate(1);
                }
                current.extend(accepted);
            });
        }
        input.set_value("");
    };

    let remove = move |index: usize| {
        files.update(|current| {
            if index < current.len() {
                current.remove(index).release();
            }
        });
    };

    view! {
        <div class="file-picker">
            <label class="form__label">{label}</label>
            <input
                type="file"
                class="file-picker__input"
                accept=kind.accept_attr()
                multiple=multiple
                disabled=move || disabled.get()
                on:change=on_change
            />
            <ul class="file-picker__list">
                {move || {
                    files
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, staged)| {
                            view! {
                                <li class="file-picker__item">
                                    {staged.preview_url.clone().map(|src| view! {
                                        <img class="file-picker__preview" src=src alt=staged.name.clone() />
                                    })}
                                    <span class="file-picker__name">{staged.name.clone()}</span>
                                    <span class="file-picker__size">{staged.size_label()}</span>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        disabled=disabled
                                        on_click=move |_| remove(index)
                                    >
                                        {icon("x")}
                                    </Button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
