use messages::{
    decorators::{thread::Thread, timing::Timing},
    msg_fields::protocols::report_problem::{
        Description, ProblemReport, ProblemReportContent, ProblemReportDecorators,
    },
};
use uuid::Uuid;

pub fn build_problem_report_msg(comment: Option<String>, thread_id: &str) -> ProblemReport {
    let id = Uuid::new_v4().to_string();
    let content = ProblemReportContent::builder()
        .description(
            Description::builder()
                .code(comment.unwrap_or_default())
                .build(),
        )
        .build();

    let decorators = ProblemReportDecorators::builder()
        .thread(Thread::new(thread_id))
        .timing(Timing::now())
        .build();

    ProblemReport::builder()
        .id(id)
        .content(content)
        .decorators(decorators)
        .build()
}
