use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording_navigate() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str, NavigateOptions)) {
    let paths = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&paths);
    let navigate = move |path: &str, _options: NavigateOptions| sink.borrow_mut().push(path.to_owned());
    (paths, navigate)
}

#[test]
fn refresh_bumps_interview_revision() {
    Owner::new().with(|| {
        let interviews = RwSignal::new(InterviewsState::default());
        let (_, navigate) = recording_navigate();
        let control = RouterControl::new(navigate, Some(interviews));

        control.refresh_current_view();
        assert_eq!(interviews.with(|s| s.revision), 1);

        control.refresh_current_view();
        assert_eq!(interviews.with(|s| s.revision), 2);
    });
}

#[test]
fn refresh_without_list_is_noop() {
    Owner::new().with(|| {
        let (paths, navigate) = recording_navigate();
        let control = RouterControl::new(navigate, None);

        control.refresh_current_view();

        assert!(paths.borrow().is_empty());
    });
}

#[test]
fn refresh_after_list_disposed_is_noop() {
    Owner::new().with(|| {
        let interviews = RwSignal::new(InterviewsState::default());
        let (_, navigate) = recording_navigate();
        let control = RouterControl::new(navigate, Some(interviews));
        interviews.dispose();

        control.refresh_current_view();

        assert!(interviews.try_with(|s| s.revision).is_none());
    });
}

#[test]
fn navigate_to_forwards_path_without_refresh() {
    Owner::new().with(|| {
        let interviews = RwSignal::new(InterviewsState::default());
        let (paths, navigate) = recording_navigate();
        let control = RouterControl::new(navigate, Some(interviews));

        control.navigate_to("/sign-in");

        assert_eq!(*paths.borrow(), vec!["/sign-in".to_owned()]);
        assert_eq!(interviews.with(|s| s.revision), 0);
    });
}
