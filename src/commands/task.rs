use crate::{
    api::{AuthApi, Session, TasksApi},
    libs::{
        board::{BoardError, TaskBoard},
        config::Config,
        filter::TaskFilter,
        messages::Message,
        task::{due_date, NewTask, Task, TaskStatus},
        transition::legal_targets,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// List tasks, optionally filtered
    List {
        /// Only tasks with this status (pending, in-progress, completed)
        #[arg(short, long)]
        status: Option<TaskStatus>,
        /// Case-insensitive text to find in the title or description
        #[arg(short = 'q', long)]
        search: Option<String>,
        /// Earliest due date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest due date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Create a new task
    Create {
        /// Task title; prompted for when omitted
        title: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Show a single task
    Show {
        /// Task ID
        id: String,
    },
    /// Edit a task interactively
    Edit {
        /// Task ID
        id: String,
    },
    /// Move a pending task to in progress
    Start {
        /// Task ID
        id: String,
    },
    /// Move an in-progress task to completed
    Complete {
        /// Task ID
        id: String,
    },
    /// Move a task to the given status
    Status {
        /// Task ID
        id: String,
        /// Target status (in-progress, completed)
        status: TaskStatus,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    let mut board = open_board().await?;

    match args.command {
        TaskCommand::List { status, search, from, to } => {
            let filter = TaskFilter {
                status,
                search,
                start_date: from,
                end_date: to,
            };
            handle_list(&mut board, filter).await
        }
        TaskCommand::Create { title, description, due } => handle_create(&mut board, title, description, due).await,
        TaskCommand::Show { id } => handle_show(&mut board, &id).await,
        TaskCommand::Edit { id } => handle_edit(&mut board, &id).await,
        TaskCommand::Start { id } => handle_status(&mut board, &id, TaskStatus::InProgress).await,
        TaskCommand::Complete { id } => handle_status(&mut board, &id, TaskStatus::Completed).await,
        TaskCommand::Status { id, status } => handle_status(&mut board, &id, status).await,
        TaskCommand::Delete { id, yes } => handle_delete(&mut board, &id, yes).await,
    }
}

/// Verifies the session (logging in if needed) and connects a board to the service.
async fn open_board() -> Result<TaskBoard<TasksApi>> {
    let server = Config::read()?.server()?;
    let token = AuthApi::new(&server)?.get_token().await?;
    Ok(TaskBoard::new(TasksApi::new(&server, token)?))
}

async fn handle_list(board: &mut TaskBoard<TasksApi>, filter: TaskFilter) -> Result<()> {
    board.set_filter(filter).await?;
    let visible = board.visible();

    if visible.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&visible);
    if !board.filter().is_empty() {
        msg_info!(Message::TasksVisibleCount {
            visible: visible.len(),
            total: board.tasks().len(),
        });
    }
    Ok(())
}

async fn handle_create(
    board: &mut TaskBoard<TasksApi>,
    title: Option<String>,
    description: Option<String>,
    due: Option<NaiveDate>,
) -> Result<()> {
    let draft = match title {
        Some(title) => NewTask::new(&title)?.description(description).due_date(due),
        None => prompt_new_task()?,
    };

    let created = board.create(draft).await?;
    msg_success!(Message::TaskCreated(created.title.clone()));
    View::task(&created);
    Ok(())
}

async fn handle_show(board: &mut TaskBoard<TasksApi>, id: &str) -> Result<()> {
    let task = find(board, id).await?;
    View::task(&task);
    Ok(())
}

async fn handle_edit(board: &mut TaskBoard<TasksApi>, id: &str) -> Result<()> {
    let task = find(board, id).await?;
    msg_print!(Message::EditingTask(task.title.clone()), true);

    let edited = prompt_edit(&task)?;
    if edited == task {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let saved = board.update(edited).await.map_err(report)?;
    msg_success!(Message::TaskUpdated(saved.title.clone()));
    View::task(&saved);
    Ok(())
}

async fn handle_status(board: &mut TaskBoard<TasksApi>, id: &str, status: TaskStatus) -> Result<()> {
    find(board, id).await?;

    match board.transition(id, status).await {
        Ok(saved) => {
            msg_success!(Message::TaskStatusChanged {
                title: saved.title.clone(),
                status: saved.status.to_string(),
            });
            Ok(())
        }
        Err(BoardError::Transition(rejected)) => {
            // Illegal requests are reported and dropped; nothing was sent to the service.
            if rejected.current.is_terminal() {
                let title = board.get(id).map(|task| task.title.clone()).unwrap_or_default();
                msg_warning!(Message::TaskAlreadyCompleted(title));
            } else {
                msg_warning!(Message::TaskTransitionRejected {
                    current: rejected.current.to_string(),
                    requested: rejected.requested.to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(report(e)),
    }
}

async fn handle_delete(board: &mut TaskBoard<TasksApi>, id: &str, yes: bool) -> Result<()> {
    let task = find(board, id).await?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let deleted = board.delete(id).await.map_err(report)?;
    msg_success!(Message::TaskDeleted(deleted.title));
    Ok(())
}

/// Loads the full list and returns the task with `id`.
async fn find(board: &mut TaskBoard<TasksApi>, id: &str) -> Result<Task> {
    board.set_filter(TaskFilter::default()).await?;
    board
        .get(id)
        .cloned()
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id.to_string())))
}

fn report(error: BoardError) -> anyhow::Error {
    match error {
        BoardError::NotFound(id) => msg_error_anyhow!(Message::TaskNotFound(id)),
        BoardError::Transition(rejected) => msg_error_anyhow!(Message::TaskTransitionRejected {
            current: rejected.current.to_string(),
            requested: rejected.requested.to_string(),
        }),
        BoardError::Store(e) => msg_error_anyhow!(Message::ApiRequestFailed(e.to_string())),
    }
}

fn prompt_new_task() -> Result<NewTask> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            NewTask::new(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let due = prompt_due_date(&theme, None)?;

    Ok(NewTask::new(&title)?.description(Some(description)).due_date(due))
}

/// Mirrors the edit form: every field is editable, the status picker only offers reachable stages.
fn prompt_edit(task: &Task) -> Result<Task> {
    let theme = ColorfulTheme::default();
    let mut edited = task.clone();

    edited.title = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            NewTask::new(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?
        .trim()
        .to_string();

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    edited.description = Some(description).filter(|d| !d.trim().is_empty());

    edited.due_date = prompt_due_date(&theme, task.due_date)?;

    let mut choices = vec![task.status];
    choices.extend(legal_targets(task.status));
    if choices.len() > 1 {
        let labels: Vec<String> = choices.iter().map(|status| status.to_string()).collect();
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::PromptTaskStatus.to_string())
            .items(&labels)
            .default(0)
            .interact()?;
        edited.status = choices[selection];
    }

    Ok(edited)
}

fn prompt_due_date(theme: &ColorfulTheme, current: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
    let default = current.map(|date| date.format(due_date::FORMAT).to_string()).unwrap_or_default();

    let raw: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(default)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            match input.trim() {
                "" => Ok(()),
                raw => NaiveDate::parse_from_str(raw, due_date::FORMAT)
                    .map(|_| ())
                    .map_err(|_| Message::InvalidDueDate(raw.to_string()).to_string()),
            }
        })
        .interact_text()?;

    match raw.trim() {
        "" => Ok(None),
        raw => Ok(Some(NaiveDate::parse_from_str(raw, due_date::FORMAT)?)),
    }
}
