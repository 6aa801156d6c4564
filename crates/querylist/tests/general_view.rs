//! Filtering concrete items into a view of a more general item type.
//!
//! `Enrolled` plays the general capability: anything with a start year that
//! can also answer match queries. `Student` and `LpaStudent` are concrete
//! kinds of it; `Employee` is matchable but not enrolled.

use querylist::{get_matches, get_matches_as, get_matches_into, Enrolled, QueryItem, QueryList};

#[derive(Debug, Clone, PartialEq)]
struct Student {
    name: &'static str,
    course: &'static str,
    year_started: i32,
}

impl QueryItem for Student {
    fn match_field_value(&self, field: &str, value: &str) -> bool {
        match field.to_ascii_uppercase().as_str() {
            "NAME" => self.name.eq_ignore_ascii_case(value),
            "COURSE" => self.course.eq_ignore_ascii_case(value),
            "YEARSTARTED" => value.parse() == Ok(self.year_started),
            _ => false,
        }
    }
}

impl Enrolled for Student {
    fn year_started(&self) -> i32 {
        self.year_started
    }
}

/// A student with progress tracking; matches on `percentComplete` as well.
#[derive(Debug, Clone, PartialEq)]
struct LpaStudent {
    student: Student,
    percent_complete: f64,
}

impl QueryItem for LpaStudent {
    fn match_field_value(&self, field: &str, value: &str) -> bool {
        if field.eq_ignore_ascii_case("percentComplete") {
            return value.parse() == Ok(self.percent_complete);
        }
        self.student.match_field_value(field, value)
    }
}

impl Enrolled for LpaStudent {
    fn year_started(&self) -> i32 {
        self.student.year_started
    }
}

/// Matchable, but with no start year.
#[derive(Debug, Clone, PartialEq)]
struct Employee {
    name: &'static str,
    dept: &'static str,
}

impl QueryItem for Employee {
    fn match_field_value(&self, field: &str, value: &str) -> bool {
        match field.to_ascii_uppercase().as_str() {
            "NAME" => self.name.eq_ignore_ascii_case(value),
            "DEPT" => self.dept.eq_ignore_ascii_case(value),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Member {
    Regular(Student),
    Tracked(LpaStudent),
}

impl From<LpaStudent> for Member {
    fn from(s: LpaStudent) -> Self {
        Member::Tracked(s)
    }
}

impl From<Student> for Member {
    fn from(s: Student) -> Self {
        Member::Regular(s)
    }
}

fn lpa(name: &'static str, course: &'static str, year_started: i32, pct: f64) -> LpaStudent {
    LpaStudent {
        student: Student {
            name,
            course,
            year_started,
        },
        percent_complete: pct,
    }
}

fn lpa_students() -> Vec<LpaStudent> {
    vec![
        lpa("Ann", "Java", 2020, 10.0),
        lpa("Bob", "Python", 2021, 55.5),
        lpa("Cid", "Python", 2021, 100.0),
        lpa("Dee", "C++", 2023, 0.0),
    ]
}

/// Works on any slice of enrolled items, concrete or general.
fn years<T: Enrolled + ?Sized>(items: &[&T]) -> Vec<i32> {
    items.iter().map(|item| item.year_started()).collect()
}

#[test]
fn general_view_holds_the_same_elements_as_the_instance_filter() {
    let list = QueryList::new(lpa_students());

    let concrete: Vec<&LpaStudent> = list.get_matches("Course", "Python");
    let general: Vec<&dyn Enrolled> = get_matches_as(list.items(), "Course", "Python");

    assert_eq!(concrete.len(), 2);
    assert_eq!(general.len(), concrete.len());
    for (c, g) in concrete.iter().zip(&general) {
        assert!(std::ptr::addr_eq(*c, *g));
    }
    assert_eq!(years(&concrete), years(&general));
}

#[test]
fn mixed_kinds_share_one_general_view() {
    let plain = vec![Student {
        name: "Eve",
        course: "Python",
        year_started: 2021,
    }];
    let tracked = lpa_students();

    let mut everyone: Vec<&dyn Enrolled> = get_matches_as(&plain, "yearStarted", "2021");
    everyone.extend(get_matches_as::<dyn Enrolled, _>(&tracked, "yearStarted", "2021"));

    assert_eq!(everyone.len(), 3);
    assert!(everyone.iter().all(|e| e.year_started() == 2021));

    // The general view is itself a sequence of matchable items.
    let refined = get_matches(everyone.iter().copied(), "name", "cid");
    assert_eq!(refined.len(), 1);
}

#[test]
fn general_view_matches_through_the_general_type() {
    let tracked = lpa_students();
    let done: Vec<&dyn Enrolled> = get_matches_as(&tracked, "percentComplete", "100");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].year_started(), 2021);
}

#[test]
fn dyn_query_item_view_needs_no_extra_impls() {
    let tracked = lpa_students();
    let general: Vec<&dyn QueryItem> = get_matches_as(&tracked, "name", "DEE");
    assert_eq!(general.len(), 1);
    assert!(std::ptr::addr_eq(general[0], &tracked[3]));
}

#[test]
fn owned_general_view_through_an_enum() {
    let tracked = lpa_students();
    let members: Vec<Member> = get_matches_into(&tracked, "course", "java");
    assert_eq!(members, vec![Member::Tracked(tracked[0].clone())]);

    let plain = vec![tracked[1].student.clone()];
    let members: Vec<Member> = get_matches_into(&plain, "course", "python");
    assert_eq!(members, vec![Member::Regular(plain[0].clone())]);
}

#[test]
fn collection_bound_to_the_general_capability() {
    // A list whose element type is the general trait object itself.
    let plain = Student {
        name: "Eve",
        course: "Rust",
        year_started: 2024,
    };
    let tracked = lpa("Fay", "Rust", 2022, 42.0);
    let items: Vec<Box<dyn Enrolled>> = vec![Box::new(plain), Box::new(tracked)];
    let list = QueryList::new(items);

    let matches = list.get_matches("course", "rust");
    let general: Vec<&dyn Enrolled> = matches.into_iter().map(|b| &**b).collect();
    assert_eq!(years(&general), vec![2024, 2022]);
}

#[test]
fn plain_items_go_through_the_free_filters() {
    let staff = vec![
        Employee {
            name: "Gus",
            dept: "IT",
        },
        Employee {
            name: "Hal",
            dept: "HR",
        },
        Employee {
            name: "Ida",
            dept: "IT",
        },
    ];

    let it = get_matches(&staff, "dept", "it");
    assert_eq!(it, vec![&staff[0], &staff[2]]);

    let general: Vec<&dyn QueryItem> = get_matches_as(&staff, "name", "hal");
    assert!(std::ptr::addr_eq(general[0], &staff[1]));
}
