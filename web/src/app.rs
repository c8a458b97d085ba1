use jeopardy_core::{
    Board, BoardConfig, BoardView, CellCoord, GameSession, RevealState, SetupPhase, SetupTicket,
    TriviaClient, load_board,
};
use yew::prelude::*;

use crate::http::GlooTriviaApi;
use crate::utils::js_random_seed;

pub(crate) enum Msg {
    Restart,
    SetupFinished(SetupTicket, jeopardy_core::Result<Board>),
    CellActivated(CellCoord),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    coord: CellCoord,
    text: AttrValue,
    state: RevealState,
    callback: Callback<CellCoord>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        coord,
        text,
        state,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        match state {
            RevealState::Hidden => classes!(),
            RevealState::QuestionShown => classes!("open", "question"),
            RevealState::AnswerShown => classes!("open", "answer", "locked"),
        }
    );
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} clicked", coord);
        callback.emit(coord);
    });

    html! {
        <td {class} {onclick}>{text.to_string()}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct AppProps {
    pub api_url: AttrValue,
    pub config: BoardConfig,
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct App {
    session: GameSession,
    view: BoardView,
    api: GlooTriviaApi,
    on_cell: Callback<CellCoord>,
}

impl App {
    fn start_setup(&mut self, ctx: &Context<Self>) -> bool {
        let Ok(ticket) = self.session.begin_setup() else {
            return false;
        };
        self.view = BoardView::empty();

        let AppProps { config, seed, .. } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!(
            "new game of {} cells, seed: {}",
            config.total_cells(),
            seed
        );

        let mut client = TriviaClient::new(self.api.clone(), config, seed);
        ctx.link().send_future(async move {
            let result = load_board(&mut client).await;
            Msg::SetupFinished(ticket, result)
        });
        true
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Restart);
        Self {
            session: GameSession::new(),
            view: BoardView::empty(),
            api: GlooTriviaApi::new(ctx.props().api_url.clone()),
            on_cell: ctx.link().callback(Msg::CellActivated),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => self.start_setup(ctx),
            SetupFinished(ticket, result) => {
                self.view = self
                    .session
                    .finish_setup(ticket, result)
                    .unwrap_or_default();
                true
            }
            CellActivated(coord) => match self.session.activate(coord) {
                Some(update) => self.view.apply(&update),
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.session.is_loading();
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="restart" onclick={cb_restart} disabled={loading}>
                        { if loading { "Loading..." } else { "Restart" } }
                    </button>
                </nav>
                if loading {
                    <div class="spinner"/>
                }
                if let SetupPhase::Failed(err) = self.session.phase() {
                    <p class="error">{ err.to_string() }</p>
                }
                <table id="gameBoard">
                    <thead>
                        <tr id="column-top">
                            { for self.view.headers().iter().map(|title| html! { <th>{ title.clone() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.view.rows().map(|row| html! {
                                <tr>
                                    {
                                        for row.map(|(coord, text)| html! {
                                            <CellView
                                                {coord}
                                                text={AttrValue::from(text.to_string())}
                                                state={self.session.reveal_state_at(coord).unwrap_or_default()}
                                                callback={self.on_cell.clone()}
                                            />
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}
