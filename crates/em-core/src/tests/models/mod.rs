mod new_identity;
