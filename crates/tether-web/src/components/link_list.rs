use tether_core::links::{
  FALLBACK_ICON,
  display_domain,
  favicon_url,
  is_valid_url
};
use web_sys::HtmlImageElement;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct LinkListProps {
  pub links:      Vec<String>,
  pub show_icons: bool,
  #[prop_or_default]
  pub on_remove:  Option<Callback<usize>>
}

/// Only http(s) links are rendered as
/// anchors; anything else is shown as
/// text.
fn safe_href(link: &str) -> Option<String> {
  is_valid_url(link)
    .then(|| link.to_string())
}

#[function_component(LinkList)]
pub fn link_list(
  props: &LinkListProps
) -> Html {
  if props.links.is_empty() {
    return html! {};
  }

  // A blocked favicon request falls
  // back to the bundled icon.
  let on_icon_error =
    Callback::from(|e: Event| {
      let img: HtmlImageElement =
        e.target_unchecked_into();
      if !img.src().ends_with(FALLBACK_ICON)
      {
        img.set_src(FALLBACK_ICON);
      }
    });

  html! {
      <ul class="links">
          { for props.links.iter().enumerate().map(|(index, link)| {
              let remove = props.on_remove.clone().map(|on_remove| {
                  html! {
                      <button
                          class="chip-remove"
                          title="Remove link"
                          onclick={move |_| on_remove.emit(index)}
                      >
                          { "×" }
                      </button>
                  }
              });
              html! {
                  <li class="link" key={format!("{index}-{link}")}>
                      if props.show_icons {
                          <img
                              class="favicon"
                              src={favicon_url(link)}
                              alt=""
                              onerror={on_icon_error.clone()}
                          />
                      }
                      {
                          match safe_href(link) {
                              | Some(href) => html! {
                                  <a
                                      href={href}
                                      target="_blank"
                                      rel="noopener noreferrer"
                                      title={link.clone()}
                                  >
                                      { display_domain(link) }
                                  </a>
                              },
                              | None => html! {
                                  <span class="link-text" title={link.clone()}>
                                      { display_domain(link) }
                                  </span>
                              }
                          }
                      }
                      { for remove }
                  </li>
              }
          }) }
      </ul>
  }
}
