//! Home page: the user's workouts and routines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Whenever the session token changes (restore or login)
//! both lists are fetched concurrently and replace the displayed state only
//! if both reads succeed. Creations are appended to the lists; routine cards
//! can be deleted.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged by `session::DashboardState` and leaves the
//! current lists untouched.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use session::{DashboardState, Routine, RoutineForm, Workout, WorkoutForm};
#[cfg(feature = "hydrate")]
use session::{submit_routine, submit_workout};

use crate::components::protected_route::ProtectedRoute;
use crate::state::auth::{AppSession, tracked_token};

/// Workout names of a routine, comma separated.
fn routine_summary(routine: &Routine) -> String {
    if routine.workouts.is_empty() {
        return "No workouts".to_owned();
    }
    routine
        .workouts
        .iter()
        .map(|w| w.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn description_text(description: Option<&str>) -> String {
    description.unwrap_or_default().to_owned()
}

#[component]
pub fn HomePage(session: AppSession) -> impl IntoView {
    view! {
        <ProtectedRoute session=session>
            <Dashboard session=session/>
        </ProtectedRoute>
    }
}

#[component]
fn Dashboard(session: AppSession) -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState::default());
    let current_token = Memo::new(move |_| tracked_token(&session));

    // Refetch on every token change; nothing runs without a token.
    Effect::new(move |_| {
        let Some(token) = current_token.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = session.api().dashboard(&token).await;
            dashboard.update(|d| {
                d.apply_fetch(result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_delete_routine = Callback::new(move |routine_id: i64| {
        let Some(token) = current_token.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = session.api().delete_routine(&token, routine_id).await;
            dashboard.update(|d| {
                d.apply_deleted_routine(routine_id, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, routine_id);
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Workout Planner"</h1>
                <button class="home-page__logout" on:click=move |_| session.logout()>
                    "Logout"
                </button>
            </header>
            <CreateWorkoutForm session=session dashboard=dashboard/>
            <CreateRoutineForm session=session dashboard=dashboard/>
            <section class="home-page__routines">
                <h2>"Your routines"</h2>
                {move || {
                    dashboard
                        .get()
                        .routines
                        .into_iter()
                        .map(|routine| view! { <RoutineCard routine=routine on_delete=on_delete_routine/> })
                        .collect::<Vec<_>>()
                }}
            </section>
        </div>
    }
}

#[component]
fn RoutineCard(routine: Routine, on_delete: Callback<i64>) -> impl IntoView {
    let routine_id = routine.id;
    let summary = routine_summary(&routine);
    view! {
        <article class="routine-card">
            <h3>{routine.name}</h3>
            <p>{description_text(routine.description.as_deref())}</p>
            <p class="routine-card__workouts">{summary}</p>
            <button class="routine-card__delete" on:click=move |_| on_delete.run(routine_id)>
                "Delete"
            </button>
        </article>
    }
}

#[component]
fn CreateWorkoutForm(session: AppSession, dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let form = RwSignal::new(WorkoutForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        let draft = form.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = submit_workout(session.api(), &token, &draft).await;
            if dashboard
                .try_update(|d| d.apply_created_workout(result))
                .unwrap_or(false)
            {
                form.update(WorkoutForm::clear);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, draft, dashboard);
    };

    view! {
        <form class="workout-form" on:submit=on_submit>
            <h2>"Create workout"</h2>
            <input
                type="text"
                placeholder="Workout name"
                required=true
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Workout description"
                required=true
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            />
            <button type="submit">"Create workout"</button>
        </form>
    }
}

#[component]
fn CreateRoutineForm(session: AppSession, dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let form = RwSignal::new(RoutineForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        let draft = form.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = submit_routine(session.api(), &token, &draft).await;
            if dashboard
                .try_update(|d| d.apply_created_routine(result))
                .unwrap_or(false)
            {
                form.update(RoutineForm::clear);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, draft, dashboard);
    };

    let workout_option = move |workout: Workout| {
        let workout_id = workout.id;
        view! {
            <label class="routine-form__option">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.is_selected(workout_id))
                    on:change=move |_| form.update(|f| f.toggle_workout(workout_id))
                />
                {workout.name}
            </label>
        }
    };

    view! {
        <form class="routine-form" on:submit=on_submit>
            <h2>"Create routine"</h2>
            <input
                type="text"
                placeholder="Routine name"
                required=true
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Routine description"
                required=true
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            />
            <fieldset class="routine-form__workouts">
                <legend>"Workouts"</legend>
                {move || {
                    dashboard
                        .get()
                        .workouts
                        .into_iter()
                        .map(workout_option)
                        .collect::<Vec<_>>()
                }}
            </fieldset>
            <button type="submit">"Create routine"</button>
        </form>
    }
}
