use yew::prelude::*;

/// Overlay dialog shell: dimmed backdrop, titled panel, close button.
/// Visibility is owned by the parent, which renders the modal only while it
/// should be on screen.
pub struct Modal;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub wide: bool,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Modal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="modal-overlay">
                <div class={classes!("modal-panel", props.wide.then_some("wide"))}>
                    <div class="modal-header">
                        <h3>{ &props.title }</h3>
                        <button class="icon-btn" title="Close" onclick={props.on_close.clone()}>
                            { "✕" }
                        </button>
                    </div>
                    <div class="modal-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}

/// Blocking yes/no prompt used in front of destructive actions.
pub fn confirm_dialog(
    title: &str,
    message: &str,
    confirm_label: &str,
    on_confirm: Callback<MouseEvent>,
    on_cancel: Callback<MouseEvent>,
) -> Html {
    html! {
        <Modal title={title.to_string()} on_close={on_cancel.clone()}>
            <p>{ message }</p>
            <div class="dialog-actions">
                <button class="btn" onclick={on_cancel}>{ "Cancel" }</button>
                <button class="btn danger" onclick={on_confirm}>{ confirm_label }</button>
            </div>
        </Modal>
    }
}
