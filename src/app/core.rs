use crate::error::EvaluatorError;
use crate::evaluation::report::RankedReport;
use crate::image_intake::image::SelectedImage;
use crate::image_intake::tensor::ImageTensor;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    LoadingPhoto,
    Evaluating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

/// A blocking message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn from_error(err: &EvaluatorError) -> Self {
        match err {
            EvaluatorError::Selection => Notice {
                kind: NoticeKind::Warning,
                title: "Missing Input".to_string(),
                message: err.to_string(),
            },
            _ => Notice {
                kind: NoticeKind::Error,
                title: "Error".to_string(),
                message: format!("An error occurred: {}", err),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub path_input: String,
    pub selected: Option<Arc<SelectedImage>>,
    /// Bumped on every successful selection so the preview can be refreshed.
    pub selection_generation: u64,
    pub status: Status,
    pub report: Option<RankedReport>,
    pub notice: Option<Notice>,
}

impl State {
    pub fn can_evaluate(&self) -> bool {
        self.selected.is_some() && self.status == Status::Idle && self.notice.is_none()
    }

    pub fn can_select(&self) -> bool {
        self.status == Status::Idle && self.notice.is_none()
    }
}

#[derive(Debug)]
pub enum Msg {
    PathInputChanged(String),
    SelectPhotoClicked,
    PhotoDropped(PathBuf),
    PhotoLoadDone(Result<Arc<SelectedImage>, EvaluatorError>),
    EvaluateClicked,
    EvaluateDone(RankedReport),
    NoticeDismissed,
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::PhotoLoadDone(Ok(selected)) => {
                format!("PhotoLoadDone(Ok({}))", selected.path.display())
            }
            Msg::EvaluateDone(report) => format!("EvaluateDone({} rows)", report.len()),
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadPhoto { path: PathBuf },
    Evaluate { tensor: Arc<ImageTensor> },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::LoadPhoto { path } => format!("LoadPhoto({})", path.display()),
            Effect::Evaluate { tensor } => format!("Evaluate({:?})", tensor.shape()),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

fn select(mut state: State, path: PathBuf) -> (State, Vec<Effect>) {
    if !state.can_select() || path.as_os_str().is_empty() {
        return (state, vec![]);
    }
    state.path_input = path.to_string_lossy().into_owned();
    state.status = Status::LoadingPhoto;
    (state, vec![Effect::LoadPhoto { path }])
}

pub fn transition(state: State, msg: Msg) -> (State, Vec<Effect>) {
    match (state.status, msg) {
        (_, Msg::PathInputChanged(path_input)) => (
            State {
                path_input,
                ..state
            },
            vec![],
        ),

        (Status::Idle, Msg::SelectPhotoClicked) => {
            let path = PathBuf::from(state.path_input.trim());
            select(state, path)
        }
        (Status::Idle, Msg::PhotoDropped(path)) => select(state, path),

        (Status::LoadingPhoto, Msg::PhotoLoadDone(Ok(selected))) => (
            State {
                selected: Some(selected),
                selection_generation: state.selection_generation + 1,
                status: Status::Idle,
                ..state
            },
            vec![],
        ),
        // Prior selection and report stay as they were.
        (Status::LoadingPhoto, Msg::PhotoLoadDone(Err(err))) => (
            State {
                status: Status::Idle,
                notice: Some(Notice::from_error(&err)),
                ..state
            },
            vec![],
        ),

        (Status::Idle, Msg::EvaluateClicked) if state.notice.is_none() => {
            match state.selected.clone() {
                Some(selected) => (
                    State {
                        status: Status::Evaluating,
                        ..state
                    },
                    vec![Effect::Evaluate {
                        tensor: selected.tensor.clone(),
                    }],
                ),
                None => (
                    State {
                        notice: Some(Notice::from_error(&EvaluatorError::Selection)),
                        ..state
                    },
                    vec![],
                ),
            }
        }

        (Status::Evaluating, Msg::EvaluateDone(report)) => (
            State {
                report: Some(report),
                status: Status::Idle,
                ..state
            },
            vec![],
        ),

        (_, Msg::NoticeDismissed) => (
            State {
                notice: None,
                ..state
            },
            vec![],
        ),

        // Overlapping triggers while busy are dropped.
        _ => (state, vec![]),
    }
}
