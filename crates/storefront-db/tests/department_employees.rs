//! Department/employee relation tests.

use storefront_core::{DepartmentPatch, EmployeePatch, NewDepartment, NewEmployee};
use storefront_db::{Database, DbConfig, DbError, EntityStore};

async fn db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

fn employee(name: &str, department_id: Option<i64>) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        email: None,
        department_id,
    }
}

#[tokio::test]
async fn test_department_employees_ordered_by_id() {
    let db = db().await;
    let sales = db
        .departments()
        .create(NewDepartment {
            name: "Sales".to_string(),
        })
        .await
        .unwrap();
    let support = db
        .departments()
        .create(NewDepartment {
            name: "Support".to_string(),
        })
        .await
        .unwrap();

    let ada = db.employees().create(employee("Ada", Some(sales.id))).await.unwrap();
    db.employees()
        .create(employee("Grace", Some(support.id)))
        .await
        .unwrap();
    let linus = db.employees().create(employee("Linus", Some(sales.id))).await.unwrap();

    let staff = db.departments().employees(sales.id).await.unwrap();
    let ids: Vec<_> = staff.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![ada.id, linus.id]);
}

#[tokio::test]
async fn test_employees_of_missing_department_is_not_found() {
    let db = db().await;

    let err = db.departments().employees(42).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Department"));
}

#[tokio::test]
async fn test_empty_department_has_no_employees() {
    let db = db().await;
    let empty = db
        .departments()
        .create(NewDepartment {
            name: "Empty".to_string(),
        })
        .await
        .unwrap();

    assert!(db.departments().employees(empty.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_department_reference_is_rejected() {
    let db = db().await;

    let err = db
        .employees()
        .create(employee("Ghost", Some(404)))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

    let ok = db.employees().create(employee("Loner", None)).await.unwrap();
    let err = db
        .employees()
        .update(
            ok.id,
            EmployeePatch {
                department_id: Some(404),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
}

#[tokio::test]
async fn test_deleting_department_removes_its_employees() {
    let db = db().await;
    let dept = db
        .departments()
        .create(NewDepartment {
            name: "Temp".to_string(),
        })
        .await
        .unwrap();
    let worker = db.employees().create(employee("Temp Worker", Some(dept.id))).await.unwrap();
    let outsider = db.employees().create(employee("Outsider", None)).await.unwrap();

    db.departments().delete_by_id(dept.id).await.unwrap();

    assert!(db.employees().find_by_id(worker.id).await.unwrap().is_none());
    assert!(db.employees().find_by_id(outsider.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_department_rename() {
    let db = db().await;
    let dept = db
        .departments()
        .create(NewDepartment {
            name: "Eng".to_string(),
        })
        .await
        .unwrap();

    let renamed = db
        .departments()
        .update(
            dept.id,
            DepartmentPatch {
                name: Some("Engineering".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.id, dept.id);
    assert_eq!(db.departments().get_by_id(dept.id).await.unwrap().name, "Engineering");
}
