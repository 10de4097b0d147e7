use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <h1>{props.title.clone()}</h1>
            {for props.subtitle.as_ref().map(|s| html! { <p class="app-subtitle">{s.clone()}</p> })}
        </header>
    }
}
