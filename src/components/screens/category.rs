use chrono::{DateTime, Utc};
use leptos::ev;
use leptos::prelude::*;
use uuid::Uuid;

use super::{ScreenFrame, format_date_display, format_date_input, parse_date_input, use_accent};
use crate::components::particle_field::AppColors;
use crate::data::model::{add_item, delete_item, toggle_completion};
use crate::data::storage::{load_items, save_items};
use crate::data::{BrowserStorage, Category, CategoryItem, Priority};

const FIELD_STYLE: &str = "display: block; width: 100%; margin: 6px 0; padding: 8px; border-radius: 8px;";

/// Goal list for one category, with an add form.
#[component]
pub fn CategoryScreen(category: Category) -> impl IntoView {
	let items = RwSignal::new(load_items(&BrowserStorage, category));

	// Every mutation persists the whole list right away.
	let mutate = move |f: &dyn Fn(&mut Vec<CategoryItem>) -> bool| {
		items.update(|list| {
			if f(list) {
				save_items(&BrowserStorage, category, list);
			}
		});
	};
	let on_toggle = move |id: Uuid| mutate(&|list| toggle_completion(list, id));
	let on_delete = move |id: Uuid| mutate(&|list| delete_item(list, id));
	let on_add = move |title: String, description: String, date: DateTime<Utc>, priority: Priority| {
		mutate(&|list| {
			add_item(list, title.clone(), description.clone(), date, priority);
			true
		})
	};

	view! {
		<ScreenFrame>
			<h1 style="font-family: serif; font-size: 28px;">{category.title()}</h1>
			<p style="font-size: 14px; opacity: 0.6;">
				{format!("{} GOALS", category.title().to_uppercase())}
			</p>
			<p style="opacity: 0.7;">{category.description()}</p>

			<Show
				when=move || items.with(|list| !list.is_empty())
				fallback=move || {
					view! {
						<div class="empty-state" style="text-align: center; padding: 30px; opacity: 0.7;">
							<div style="font-size: 40px;">{category.icon()}</div>
							<p>"No goals yet. Add your first one below."</p>
						</div>
					}
				}
			>
				<For
					each=move || items.get()
					key=|item| (item.id, item.is_completed)
					children=move |item| {
						view! { <ItemCard item=item on_toggle=on_toggle on_delete=on_delete /> }
					}
				/>
			</Show>

			<AddItemForm on_add=on_add />
		</ScreenFrame>
	}
}

#[component]
fn ItemCard(
	item: CategoryItem,
	on_toggle: impl Fn(Uuid) + Copy + 'static,
	on_delete: impl Fn(Uuid) + Copy + 'static,
) -> impl IntoView {
	let id = item.id;
	let title_style = if item.is_completed {
		"text-decoration: line-through; opacity: 0.5;"
	} else {
		""
	};
	let badge = format!(
		"display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {};",
		item.priority.color().to_css()
	);

	view! {
		<div
			class="item-card"
			style=format!(
				"margin: 10px 0; padding: 12px; border-radius: 12px; background: {};",
				AppColors::CARD.with_alpha(0.8).to_css()
			)
		>
			<label style="display: flex; align-items: center; gap: 8px;">
				<input
					type="checkbox"
					prop:checked=item.is_completed
					on:change=move |_| on_toggle(id)
				/>
				<strong style=title_style>{item.title.clone()}</strong>
				<span style=badge title=item.priority.label() />
			</label>
			<p style="opacity: 0.7;">{item.description.clone()}</p>
			<small style="opacity: 0.5;">{format_date_display(item.date)}</small>
			<button
				on:click=move |_| on_delete(id)
				style="float: right; background: none; border: none; color: tomato;"
			>
				"Delete"
			</button>
		</div>
	}
}

#[component]
fn AddItemForm(
	on_add: impl Fn(String, String, DateTime<Utc>, Priority) + 'static,
) -> impl IntoView {
	let accent = use_accent();
	let title = RwSignal::new(String::new());
	let description = RwSignal::new(String::new());
	let date = RwSignal::new(Utc::now());
	let priority = RwSignal::new(Priority::default());

	let submit = move |_: ev::MouseEvent| {
		let Some(t) = submitted_title(&title.get_untracked()) else {
			return;
		};
		on_add(t, description.get_untracked(), date.get_untracked(), priority.get_untracked());
		title.set(String::new());
		description.set(String::new());
		date.set(Utc::now());
		priority.set(Priority::default());
	};

	view! {
		<div class="add-item" style="margin-top: 24px;">
			<h3>"Add goal"</h3>
			<input
				type="text"
				placeholder="Title"
				style=FIELD_STYLE
				prop:value=move || title.get()
				on:input=move |ev| title.set(event_target_value(&ev))
			/>
			<textarea
				placeholder="Description"
				style=FIELD_STYLE
				prop:value=move || description.get()
				on:input=move |ev| description.set(event_target_value(&ev))
			/>
			<input
				type="date"
				style=FIELD_STYLE
				prop:value=move || format_date_input(date.get())
				on:change=move |ev| {
					if let Some(d) = parse_date_input(&event_target_value(&ev)) {
						date.set(d);
					}
				}
			/>
			<select
				style=FIELD_STYLE
				on:change=move |ev| {
					let chosen = event_target_value(&ev)
						.parse::<u8>()
						.ok()
						.and_then(|v| Priority::try_from(v).ok());
					if let Some(p) = chosen {
						priority.set(p);
					}
				}
			>
				{Priority::ALL
					.into_iter()
					.map(|p| {
						view! {
							<option value=u8::from(p).to_string() selected=move || priority.get() == p>
								{p.label()}
							</option>
						}
					})
					.collect_view()}
			</select>
			<button
				on:click=submit
				style=move || format!(
					"padding: 8px 16px; border: none; border-radius: 8px; color: white; background: {};",
					accent.get().color().to_css()
				)
			>
				"Add"
			</button>
		</div>
	}
}

/// Title as submitted from the add form, or `None` when it is blank.
fn submitted_title(raw: &str) -> Option<String> {
	let trimmed = raw.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	#[test]
	fn blank_titles_are_rejected() {
		assert_eq!(submitted_title(""), None);
		assert_eq!(submitted_title("  \t "), None);
		assert_eq!(submitted_title("  Run a marathon "), Some("Run a marathon".to_owned()));
	}

	#[test]
	fn submitted_item_lands_in_the_list() {
		let mut list = Vec::new();
		let date = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
		let title = submitted_title(" Learn Rust ").unwrap();
		add_item(&mut list, title, String::new(), date, Priority::High);
		assert_eq!(list.len(), 1);
		assert_eq!(list[0].title, "Learn Rust");
		assert_eq!(list[0].priority, Priority::High);
		assert!(!list[0].is_completed);
	}
}
