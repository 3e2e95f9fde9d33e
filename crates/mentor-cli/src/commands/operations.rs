use mentor_application::Operation;

pub fn list() {
    for operation in Operation::all() {
        println!("{}", operation);
    }
}
