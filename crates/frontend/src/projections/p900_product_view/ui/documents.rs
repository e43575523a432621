use crate::layout::notifications::use_notifications;
use crate::shared::download::{download_document, DownloadOutcome, DownloadRegistry};
use crate::shared::icons::icon;
use contracts::shared::documents::{available_documents, document_file_name, DocumentCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

/// Start a tracked download; a path that is already downloading is ignored
fn start_download(
    path: String,
    registry: RwSignal<DownloadRegistry>,
    failures: RwSignal<HashMap<String, String>>,
    on_error: Callback<String>,
) {
    let mut ticket = None;
    registry.update(|r| ticket = r.begin(&path));
    let Some(ticket) = ticket else {
        return;
    };
    failures.update(|f| {
        f.remove(&path);
    });

    spawn_local(async move {
        let result = download_document(path.clone(), ticket.registration).await;
        registry.try_update(|r| r.finish(&path, ticket.number));
        match result {
            Ok(DownloadOutcome::Saved) => {}
            Ok(DownloadOutcome::Aborted) => log::info!("download aborted: {}", path),
            Err(e) => {
                let file = document_file_name(&path).to_string();
                failures.try_update(|f| f.insert(path, e.to_string()));
                on_error.run(format!("Could not download {}: {}", file, e));
            }
        }
    });
}

/// Documents of one category; groups of several files collapse behind a toggle
#[component]
pub fn DocumentGroup(
    category: DocumentCategory,
    #[prop(into)] raw: String,
    registry: RwSignal<DownloadRegistry>,
) -> impl IntoView {
    let notifications = use_notifications();
    let on_error = Callback::new(move |msg: String| notifications.error(msg));
    let failures = RwSignal::new(HashMap::<String, String>::new());
    let paths = available_documents(&raw);
    let count = paths.len();
    let expanded = RwSignal::new(count <= 1);

    if paths.is_empty() {
        return view! {
            <div class="documents documents--empty">
                <h4 class="documents__title">{category.label()}</h4>
                <span class="documents__none">"No documents available"</span>
            </div>
        }
        .into_any();
    }

    let items = paths
        .into_iter()
        .map(|path| {
            let file = document_file_name(&path).to_string();
            let downloading = {
                let path = path.clone();
                Signal::derive(move || registry.with(|r| r.is_downloading(&path)))
            };
            let failure = {
                let path = path.clone();
                move || failures.with(|f| f.get(&path).cloned())
            };
            let cancel = {
                let path = path.clone();
                move |_: leptos::ev::MouseEvent| {
                    registry.update(|r| {
                        r.cancel(&path);
                    })
                }
            };
            let click = move |_: leptos::ev::MouseEvent| start_download(path.clone(), registry, failures, on_error);
            view! {
                <li class="documents__item">
                    {icon("file")}
                    <span class="documents__name">{file}</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        disabled=downloading
                        on_click=click
                    >
                        {icon("download")}
                        {move || if downloading.get() { " Downloading..." } else { " Download" }}
                    </Button>
                    <Show when=move || downloading.get()>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=cancel.clone()
                        >
                            {icon("x")}
                        </Button>
                    </Show>
                    {move || failure().map(|err| view! {
                        <span class="documents__error">{err}</span>
                    })}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="documents">
            <div class="documents__header">
                <h4 class="documents__title">{category.label()}</h4>
                <Show when=move || { count > 1 }>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        size=ButtonSize::Small
                        on_click=move |_| expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
                        {format!(" {} files", count)}
                    </Button>
                </Show>
            </div>
            <ul class="documents__list" class:documents__list--collapsed=move || !expanded.get()>
                {items}
            </ul>
        </div>
    }
    .into_any()
}
