use tether_core::TaskStats;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::click_action;
use crate::app::Action;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
  pub stats:           TaskStats,
  pub theme_label:     &'static str,
  pub show_link_icons: bool,
  pub on_action:       Callback<Action>
}

#[function_component(AppHeader)]
pub fn app_header(
  props: &AppHeaderProps
) -> Html {
  let stats = props.stats;
  let on_theme = click_action(
    &props.on_action,
    Action::ToggleTheme
  );
  let on_icons = click_action(
    &props.on_action,
    Action::ToggleLinkIcons
  );
  let icons_label =
    if props.show_link_icons {
      "Hide icons"
    } else {
      "Show icons"
    };

  html! {
      <header class="panel header">
          <div class="brand">{ "Tether" }</div>
          <div class="stats">
              <span class="stat">{ format!("{} tasks", stats.total) }</span>
              <span class="stat">{ format!("{} completed", stats.completed) }</span>
              <span class="stat">{ format!("{} pending", stats.pending) }</span>
              <span class="stat">{ format!("{} links", stats.links) }</span>
          </div>
          <div class="header-actions">
              <button class="btn" onclick={on_icons}>{ icons_label }</button>
              <button class="btn theme-toggle" onclick={on_theme}>
                  { props.theme_label }
              </button>
          </div>
      </header>
  }
}
