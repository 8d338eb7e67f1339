//! Lead List Component
//!
//! Table of recent leads, reloaded whenever the refresh signal changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::LeadApi;
use crate::context::use_lead_client;
use crate::format::{LeadRow, COLUMNS};
use crate::state::{load_leads, LeadListState};

#[component]
pub fn LeadList(#[prop(into)] refresh: Signal<u32>) -> impl IntoView {
    let client = use_lead_client();
    let list = RwSignal::new(LeadListState::default());

    reload_on_refresh(client, list, refresh);

    let rows = move || list.with(|state| state.leads.iter().map(LeadRow::from).collect::<Vec<_>>());

    view! {
        <section class="lead-list">
            <h2>"Recent Leads"</h2>
            {move || list.with(|state| state.error.clone()).map(|error| view! {
                <div class="load-error">{error}</div>
            })}
            <Show
                when=move || !list.with(|state| state.loading)
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <div class="table-scroll">
                    <table class="lead-table">
                        <thead>
                            <tr>
                                {COLUMNS.into_iter().map(|label| view! { <th>{label}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=|row| row.key.clone()
                                children=|row| view! {
                                    <tr>
                                        {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </section>
    }
}

/// Load on mount, then once per change of `refresh`.
pub fn reload_on_refresh<A>(api: A, list: RwSignal<LeadListState>, refresh: Signal<u32>)
where
    A: LeadApi + Clone + 'static,
{
    Effect::new(move |_| {
        let generation = refresh.get();
        tracing::debug!(generation, "loading leads");
        let api = api.clone();
        spawn_local(async move {
            load_leads(&api, &list).await;
        });
    });
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::app::bump_refresh;
    use crate::state::testing::{lead, FakeApi};

    /// Let spawned effects and loads run to completion
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_refresh_bump_reloads_once() {
        let _ = any_spawner::Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let api = Rc::new(FakeApi::listing(vec![
                    Ok(Vec::new()),
                    Ok(vec![lead("a", "Ali")]),
                ]));
                let list = RwSignal::new(LeadListState::default());
                let (refresh, set_refresh) = signal(0u32);

                reload_on_refresh(api.clone(), list, Signal::from(refresh));
                settle().await;
                assert_eq!(api.list_calls.get(), 1);
                assert!(list.with_untracked(|s| s.leads.is_empty() && !s.loading));

                bump_refresh(set_refresh);
                settle().await;
                assert_eq!(refresh.get_untracked(), 1);
                assert_eq!(api.list_calls.get(), 2);
                assert_eq!(list.with_untracked(|s| s.leads.len()), 1);

                settle().await;
                assert_eq!(api.list_calls.get(), 2);
            })
            .await;
    }
}
