mod document_id_test;
mod flashcard_test;
mod quiz_question_test;
mod storage_path_test;
