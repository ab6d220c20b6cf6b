use crate::api::ApiClient;
use crate::models::Post;
use crate::state::FeedState;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub enum Msg {
    UpdateTitle(String),
    UpdateContent(String),
    UpdateAuthor(String),
    PostsLoaded(Vec<Post>),
    Submit,
    PostCreated(Post),
    RequestFailed(String),
}

pub struct App {
    state: FeedState,
    api: ApiClient,
}

impl App {
    fn load_posts(&self, ctx: &Context<Self>) {
        let api = self.api.clone();
        let link = ctx.link().clone();

        spawn_local(async move {
            match api.list_posts().await {
                Ok(posts) => link.send_message(Msg::PostsLoaded(posts)),
                Err(e) => link.send_message(Msg::RequestFailed(format!(
                    "Failed to load posts: {}",
                    e
                ))),
            }
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: FeedState::default(),
            api: ApiClient::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // Только один раз при монтировании
        if first_render {
            self.load_posts(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateTitle(val) => {
                self.state.title = val;
                true
            }
            Msg::UpdateContent(val) => {
                self.state.content = val;
                true
            }
            Msg::UpdateAuthor(val) => {
                self.state.author = val;
                true
            }

            Msg::PostsLoaded(posts) => {
                log::debug!("Loaded {} posts", posts.len());
                self.state.posts_loaded(posts);
                true
            }

            Msg::Submit => {
                let req = self.state.draft();
                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    match api.create_post(&req).await {
                        Ok(post) => link.send_message(Msg::PostCreated(post)),
                        Err(e) => link.send_message(Msg::RequestFailed(format!(
                            "Failed to create post: {}",
                            e
                        ))),
                    }
                });

                false
            }

            Msg::PostCreated(post) => {
                log::debug!("Created post {}", post.id);
                self.state.post_created(post);
                true
            }

            // Ошибку только логируем, состояние не меняется
            Msg::RequestFailed(e) => {
                self.state.request_failed(&e);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <h1>{ "Blog" }</h1>
                { self.view_form(ctx) }
                { self.view_posts() }
            </div>
        }
    }
}

impl App {
    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="create-post" {onsubmit}>
                <input
                    type="text"
                    placeholder="Title"
                    value={self.state.title.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateTitle(input.value())
                    })}
                />
                <textarea
                    placeholder="Content"
                    value={self.state.content.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateContent(input.value())
                    })}
                />
                <input
                    type="text"
                    placeholder="Author"
                    value={self.state.author.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateAuthor(input.value())
                    })}
                />
                <button type="submit">{ "Create Post" }</button>
            </form>
        }
    }

    fn view_posts(&self) -> Html {
        html! {
            <ul class="posts-list">
                { for self.state.posts.iter().map(|post| html! {
                    <li class="post" key={post.id}>
                        <h3>{ &post.title }</h3>
                        <p>{ &post.content }</p>
                        <small>{ post.author.clone().unwrap_or_default() }</small>
                    </li>
                }) }
            </ul>
        }
    }
}
