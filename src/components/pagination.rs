use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let PaginationProps { page, total_pages, on_change } = props;
    let (page, total_pages) = (*page, *total_pages);
    if total_pages <= 1 {
        return html! {};
    }

    let go = |target: usize| {
        let on_change = on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(target))
    };

    html! {
        <div class="pagination">
            <button class="page-btn" disabled={page == 0} onclick={go(page.saturating_sub(1))}>
                {"‹"}
            </button>
            {
                (0..total_pages).map(|index| html! {
                    <button
                        key={index}
                        class={classes!("page-btn", (index == page).then(|| "page-btn-active"))}
                        onclick={go(index)}
                    >
                        {index + 1}
                    </button>
                }).collect::<Html>()
            }
            <button
                class="page-btn"
                disabled={page + 1 >= total_pages}
                onclick={go((page + 1).min(total_pages - 1))}
            >
                {"›"}
            </button>
        </div>
    }
}
