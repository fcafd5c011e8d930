mod assessment;
pub use assessment::StartAssessment;

mod dashboard;
pub use dashboard::Dashboard;

mod results;
pub use results::ResultsPage;

mod sign_in;
pub use sign_in::SignIn;
